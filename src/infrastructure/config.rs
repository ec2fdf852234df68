//! JSON-file-backed credential store.
//!
//! Credentials live in a project-local `.memlink/config.json`, shaped as the
//! header map the proxy sends upstream:
//!
//! ```json
//! { "Authorization": "Bearer <token>", "x-contract-id": "<api key>" }
//! ```
//!
//! Writes are read-merge-write: each save re-reads the file, patches one
//! field, and writes the merged document back, preserving any other fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialStore;

/// Directory holding memlink state, relative to the working directory.
pub const STATE_DIR: &str = ".memlink";

/// Credentials file name within [`STATE_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// [`CredentialStore`] implementation backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCredentialStore {
    path: PathBuf,
}

impl Default for JsonCredentialStore {
    fn default() -> Self {
        Self::at_path(Path::new(STATE_DIR).join(CONFIG_FILE))
    }
}

impl JsonCredentialStore {
    /// Store backed by an explicit file path (used by tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current document, treating a missing file as empty.
    ///
    /// A present-but-malformed file is an error so a save never silently
    /// clobbers whatever the user had.
    fn read_document(&self) -> DomainResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(err) => {
                return Err(DomainError::ConfigIo {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(DomainError::ConfigMalformed {
                path: self.path.clone(),
                source: serde_json::Error::io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "expected a JSON object at the top level",
                )),
            }),
            Err(err) => Err(DomainError::ConfigMalformed {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> DomainResult<()> {
        let io_err = |source| DomainError::ConfigIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let rendered = serde_json::to_string_pretty(&Value::Object(document.clone()))
            .map_err(|err| DomainError::ConfigMalformed {
                path: self.path.clone(),
                source: err,
            })?;
        fs::write(&self.path, rendered).map_err(|source| DomainError::ConfigIo {
            path: self.path.clone(),
            source,
        })
    }

    fn patch(&self, field: &str, value: String) -> DomainResult<()> {
        let mut document = self.read_document()?;
        document.insert(field.to_string(), Value::String(value));
        self.write_document(&document)
    }
}

impl CredentialStore for JsonCredentialStore {
    fn save_api_key(&self, api_key: &str) -> DomainResult<()> {
        self.patch("x-contract-id", api_key.to_string())
    }

    fn save_token(&self, token: &str) -> DomainResult<()> {
        let value = if token.starts_with("Bearer ") {
            token.to_string()
        } else {
            format!("Bearer {token}")
        };
        self.patch("Authorization", value)
    }

    fn load(&self) -> DomainResult<Credentials> {
        let raw = fs::read_to_string(&self.path).map_err(|source| DomainError::ConfigIo {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DomainError::ConfigMalformed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonCredentialStore {
        JsonCredentialStore::at_path(dir.path().join("config.json"))
    }

    #[test]
    fn sequential_saves_merge_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_api_key("contract-123").unwrap();
        store.save_token("tok-456").unwrap();

        let creds = store.load().unwrap();
        assert_eq!(creds.contract_id, "contract-123");
        assert_eq!(creds.authorization, "Bearer tok-456");
    }

    #[test]
    fn reverse_order_saves_also_merge() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_token("tok-456").unwrap();
        store.save_api_key("contract-123").unwrap();

        let creds = store.load().unwrap();
        assert_eq!(creds.contract_id, "contract-123");
        assert_eq!(creds.authorization, "Bearer tok-456");
    }

    #[test]
    fn save_preserves_unrelated_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"custom":"kept"}"#).unwrap();

        let store = JsonCredentialStore::at_path(&path);
        store.save_api_key("contract-123").unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["custom"], "kept");
        assert_eq!(doc["x-contract-id"], "contract-123");
    }

    #[test]
    fn token_with_bearer_prefix_is_not_doubled() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_token("Bearer already-prefixed").unwrap();
        let creds = store.load().unwrap();
        assert_eq!(creds.authorization, "Bearer already-prefixed");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(
            store.load(),
            Err(DomainError::ConfigIo { .. })
        ));
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonCredentialStore::at_path(&path);
        assert!(matches!(
            store.load(),
            Err(DomainError::ConfigMalformed { .. })
        ));
    }

    #[test]
    fn save_refuses_to_clobber_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonCredentialStore::at_path(&path);
        assert!(matches!(
            store.save_api_key("contract-123"),
            Err(DomainError::ConfigMalformed { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }
}
