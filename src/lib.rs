//! userdir: client for the user directory API (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod directory;
pub mod env;
pub mod models;
pub mod output;
pub mod transport;

pub use directory::{DirectoryClient, DirectoryError, Operation};
pub use transport::{ApiRequest, HttpTransport, Transport, TransportError};
