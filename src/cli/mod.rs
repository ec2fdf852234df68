//! CLI layer: clap types, command implementations, and output rendering.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ConnectArgs, KeyArgs, ListArgs, StartArgs};

/// Report an error that escaped a command handler and exit non-zero.
///
/// Expected outcomes (unknown agent, adapter refusal, save failure) are
/// printed inside the handlers and return `Ok`; this is the last-resort
/// path for unexpected failures such as proxy startup errors.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
