//! Shared types used across all modules.
//!
//! User records and the pagination envelopes exchanged with the directory
//! API. Other modules import from here rather than reaching into each
//! other's internals.

pub mod page;
pub mod user;

pub use page::{FilterRequest, PageRequest, PageResult};
pub use user::User;
