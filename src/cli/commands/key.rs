//! `key` command: persist user credentials.

use anyhow::Result;
use tracing::debug;

use crate::cli::types::KeyArgs;
use crate::domain::ports::CredentialStore;
use crate::infrastructure::JsonCredentialStore;

/// Save the API key (and optionally the bearer token) to the config file.
///
/// Saves merge into the existing file; a failure is reported as a printed
/// line and never crashes the process.
pub async fn execute(args: KeyArgs, json: bool) -> Result<()> {
    let store = JsonCredentialStore::default();
    execute_with_store(&store, args, json)
}

/// Same as [`execute`] but against a caller-provided store.
pub fn execute_with_store(store: &JsonCredentialStore, args: KeyArgs, json: bool) -> Result<()> {
    let saved = args
        .token
        .as_deref()
        .map_or(Ok(()), |token| store.save_token(token))
        .and_then(|()| store.save_api_key(&args.api_key));

    match saved {
        Ok(()) => {
            debug!(path = %store.path().display(), "credentials saved");
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "saved": true, "path": store.path() })
                );
            } else {
                println!("User credentials saved successfully.");
                println!("Credentials saved to {}", store.path().display());
            }
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::json!({ "saved": false, "error": err.to_string() }));
            } else {
                println!("An error occurred while saving to config file: {err}");
            }
        }
    }
    Ok(())
}
