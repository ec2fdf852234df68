//! Credential model persisted in the local configuration file.

use serde::{Deserialize, Serialize};

/// Stored user credentials, shaped exactly like the headers the proxy sends
/// upstream.
///
/// The `key` command writes the API key into `x-contract-id` and the bearer
/// token into `Authorization`. Absent fields deserialize as empty strings so
/// a partially-populated file still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// `Authorization` header value, including the `Bearer ` prefix.
    #[serde(rename = "Authorization", default)]
    pub authorization: String,

    /// `x-contract-id` header value scoping requests to a tenant.
    #[serde(rename = "x-contract-id", default)]
    pub contract_id: String,
}

impl Credentials {
    /// Returns true when neither field has been populated.
    pub fn is_empty(&self) -> bool {
        self.authorization.is_empty() && self.contract_id.is_empty()
    }
}
