//! Service layer coordinating domain ports.

pub mod connect;

pub use connect::{ConnectOutcome, ConnectService};
