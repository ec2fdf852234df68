//! Context insert endpoint.
//!
//! Forwards the validated payload to `{base_url}/insert` with the stored
//! credential headers and mirrors the upstream response verbatim. No
//! retries; transport failures map to 502 and timeouts to 504.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::models::ContextData;

use super::server::ProxyState;

/// `POST /context/insert`
pub(crate) async fn insert_context(
    State(state): State<Arc<ProxyState>>,
    Json(data): Json<ContextData>,
) -> Response {
    let url = format!("{}/insert", state.base_url);
    debug!(agent = %data.agent, %url, "forwarding context insert");

    let sent = state
        .client
        .post(&url)
        .header("Authorization", state.credentials.authorization.as_str())
        .header("x-contract-id", state.credentials.contract_id.as_str())
        .json(&data)
        .send()
        .await;

    let upstream = match sent {
        Ok(response) => response,
        Err(err) if err.is_timeout() => {
            error!(%url, "upstream call timed out");
            return (
                StatusCode::GATEWAY_TIMEOUT,
                format!("Upstream memory service timed out: {err}"),
            )
                .into_response();
        }
        Err(err) => {
            error!(%url, %err, "upstream call failed");
            return (
                StatusCode::BAD_GATEWAY,
                format!("Upstream memory service unreachable: {err}"),
            )
                .into_response();
        }
    };

    let status = upstream.status().as_u16();
    let body = match upstream.text().await {
        Ok(body) => body,
        Err(err) => {
            error!(%url, %err, "failed to read upstream body");
            return (
                StatusCode::BAD_GATEWAY,
                format!("Failed to read upstream response: {err}"),
            )
                .into_response();
        }
    };

    if status == 200 {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => (StatusCode::OK, Json(value)).into_response(),
            Err(err) => {
                error!(%url, %err, "upstream returned 200 with non-JSON body");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream returned invalid JSON: {err}"),
                )
                    .into_response()
            }
        }
    } else {
        // Mirror the upstream status and body without transformation.
        let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        (code, body).into_response()
    }
}
