//! Domain layer: models, ports, and the error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
