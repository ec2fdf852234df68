//! Credential persistence port.

use crate::domain::errors::DomainResult;
use crate::domain::models::Credentials;

/// Port for persisting and loading user credentials.
///
/// Implementations must use merge-on-write semantics: saving one field
/// re-reads the backing store, patches that field, and writes the merged
/// document back, so sequential saves never clobber the other field.
pub trait CredentialStore: Send + Sync {
    /// Persist the API key (stored as the contract id header value).
    fn save_api_key(&self, api_key: &str) -> DomainResult<()>;

    /// Persist the bearer token (stored as the Authorization header value).
    fn save_token(&self, token: &str) -> DomainResult<()>;

    /// Load the currently stored credentials.
    ///
    /// Fails if the backing store is absent or malformed; callers that want
    /// fail-fast startup semantics surface this error directly.
    fn load(&self) -> DomainResult<Credentials>;
}
