//! Context payload accepted by the proxy and forwarded upstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A context record submitted by an agent for insertion into the memory
/// service.
///
/// The proxy validates the shape and forwards the payload unchanged apart
/// from JSON re-serialization; `content` is deliberately an arbitrary JSON
/// value so any upstream-accepted document round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextData {
    /// Name of the agent submitting the context.
    pub agent: String,
    /// The context document itself.
    pub content: Value,
    /// Optional free-form metadata attached to the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
