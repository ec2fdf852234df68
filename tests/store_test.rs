//! File-backed store behavior through the command layer.

use memlink::cli::commands::{key, list};
use memlink::cli::{KeyArgs, ListArgs};
use memlink::domain::ports::{AgentStore, CredentialStore};
use memlink::{AgentRecord, JsonAgentStore, JsonCredentialStore};

#[test]
fn key_command_persists_both_fields_in_one_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCredentialStore::at_path(dir.path().join("config.json"));

    key::execute_with_store(
        &store,
        KeyArgs {
            api_key: "contract-1".to_string(),
            token: Some("tok-1".to_string()),
        },
        false,
    )
    .unwrap();

    let creds = store.load().unwrap();
    assert_eq!(creds.contract_id, "contract-1");
    assert_eq!(creds.authorization, "Bearer tok-1");
}

#[test]
fn key_command_reruns_merge_instead_of_clobbering() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCredentialStore::at_path(dir.path().join("config.json"));

    key::execute_with_store(
        &store,
        KeyArgs {
            api_key: "contract-1".to_string(),
            token: Some("tok-1".to_string()),
        },
        false,
    )
    .unwrap();

    // Second run updates only the API key; the token must survive.
    key::execute_with_store(
        &store,
        KeyArgs {
            api_key: "contract-2".to_string(),
            token: None,
        },
        false,
    )
    .unwrap();

    let creds = store.load().unwrap();
    assert_eq!(creds.contract_id, "contract-2");
    assert_eq!(creds.authorization, "Bearer tok-1");
}

#[test]
fn key_command_reports_io_failure_without_erroring() {
    // Point the store at a path whose parent is a file, so the write fails.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let store = JsonCredentialStore::at_path(blocker.join("config.json"));

    let result = key::execute_with_store(
        &store,
        KeyArgs {
            api_key: "contract-1".to_string(),
            token: None,
        },
        false,
    );

    assert!(result.is_ok());
}

#[test]
fn list_all_on_empty_store_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonAgentStore::at_path(dir.path().join("agents.json"));

    list::execute_with_store(
        &store,
        ListArgs {
            all: true,
            status: None,
        },
        false,
    )
    .unwrap();

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn list_status_reads_persisted_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonAgentStore::at_path(dir.path().join("agents.json"));
    store.upsert(AgentRecord::connected("claude")).unwrap();

    list::execute_with_store(
        &store,
        ListArgs {
            all: false,
            status: Some("Claude".to_string()),
        },
        false,
    )
    .unwrap();

    let record = store.status("claude").unwrap().unwrap();
    assert!(record.status.is_connected());
}

#[test]
fn stores_share_the_state_dir_layout() {
    let creds = JsonCredentialStore::default();
    let agents = JsonAgentStore::default();
    assert_eq!(creds.path().parent(), agents.path().parent());
}
