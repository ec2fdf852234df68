//! `start` command: run the HTTP proxy.

use anyhow::{Context, Result};

use crate::cli::types::StartArgs;
use crate::domain::ports::CredentialStore;
use crate::infrastructure::JsonCredentialStore;
use crate::proxy::{ProxyConfig, ProxyServer};

/// Load credentials, then bind and serve the proxy.
///
/// A missing or malformed credentials file fails startup here rather than
/// letting the proxy issue unauthenticated upstream requests.
pub async fn execute(args: StartArgs, json: bool) -> Result<()> {
    let store = JsonCredentialStore::default();
    let credentials = store.load().with_context(|| {
        format!(
            "Cannot start proxy: credentials unavailable at {}. Run `memlink key <api_key> --token <token>` first",
            store.path().display()
        )
    })?;

    let config = ProxyConfig::from_env(args.port);
    if !json {
        println!("Starting HTTP proxy on port {}...", config.port);
    }

    let server = ProxyServer::new(config, credentials)?;
    server
        .serve()
        .await
        .map_err(|err| anyhow::anyhow!("proxy server failed: {err}"))
}
