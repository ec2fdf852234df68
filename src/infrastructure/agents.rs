//! JSON-file-backed agent state store.
//!
//! Agent connection statuses live in `.memlink/agents.json` as a map from
//! lowercased agent name to its record:
//!
//! ```json
//! { "claude": { "status": "connected", "connected_at": "2026-08-26T12:00:00Z" } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{AgentRecord, AgentRoster, ConnectionStatus};
use crate::domain::ports::AgentStore;

use super::config::STATE_DIR;

/// Agent state file name within the state directory.
pub const AGENTS_FILE: &str = "agents.json";

/// On-disk record shape; the name is the map key, not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAgent {
    status: ConnectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    connected_at: Option<DateTime<Utc>>,
}

/// [`AgentStore`] implementation backed by a JSON file.
///
/// A `BTreeMap` keeps the file and the roster sorted by agent name.
#[derive(Debug, Clone)]
pub struct JsonAgentStore {
    path: PathBuf,
}

impl Default for JsonAgentStore {
    fn default() -> Self {
        Self::at_path(Path::new(STATE_DIR).join(AGENTS_FILE))
    }
}

impl JsonAgentStore {
    /// Store backed by an explicit file path (used by tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> DomainResult<BTreeMap<String, StoredAgent>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(DomainError::ConfigIo {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| DomainError::ConfigMalformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &BTreeMap<String, StoredAgent>) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| DomainError::ConfigIo {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let rendered = serde_json::to_string_pretty(map)
            .map_err(|err| DomainError::AgentStore(err.to_string()))?;
        fs::write(&self.path, rendered).map_err(|source| DomainError::ConfigIo {
            path: self.path.clone(),
            source,
        })
    }
}

impl AgentStore for JsonAgentStore {
    fn status(&self, name: &str) -> DomainResult<Option<AgentRecord>> {
        let key = name.to_lowercase();
        Ok(self.read_map()?.get(&key).map(|stored| AgentRecord {
            name: key.clone(),
            status: stored.status,
            connected_at: stored.connected_at,
        }))
    }

    fn upsert(&self, record: AgentRecord) -> DomainResult<()> {
        let mut map = self.read_map()?;
        map.insert(
            record.name.to_lowercase(),
            StoredAgent {
                status: record.status,
                connected_at: record.connected_at,
            },
        );
        self.write_map(&map)
    }

    fn list_all(&self) -> DomainResult<AgentRoster> {
        let agents = self
            .read_map()?
            .into_iter()
            .map(|(name, stored)| AgentRecord {
                name,
                status: stored.status,
                connected_at: stored.connected_at,
            })
            .collect();
        Ok(AgentRoster { agents })
    }
}
