//! HTTP proxy layer: the server and its endpoints.

mod insert;
pub mod server;

pub use server::{
    ProxyConfig, ProxyServer, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT,
};
