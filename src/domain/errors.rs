//! Domain errors for the memlink system.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-level errors that can occur in the memlink system.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to access configuration file {path}: {source}")]
    ConfigIo {
        /// Path of the configuration file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {path} is malformed: {source}")]
    ConfigMalformed {
        /// Path of the configuration file involved.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    #[error("No adapter found for agent: {0}")]
    UnknownAgent(String),

    #[error("Adapter for agent {agent} failed to configure MCP: {reason}")]
    AdapterConfigure {
        /// Normalized agent name.
        agent: String,
        /// Human-readable failure description.
        reason: String,
    },

    #[error("Agent state store error: {0}")]
    AgentStore(String),

    #[error("Upstream memory service returned {status}: {body}")]
    Upstream {
        /// HTTP status code from the upstream response.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },

    #[error("Upstream memory service unreachable: {0}")]
    UpstreamUnreachable(String),
}

/// Convenience alias for results carrying a [`DomainError`].
pub type DomainResult<T> = Result<T, DomainError>;
