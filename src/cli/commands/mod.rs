//! CLI command implementations.

pub mod connect;
pub mod key;
pub mod list;
pub mod start;
