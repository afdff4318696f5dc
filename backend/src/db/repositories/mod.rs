//! Repository implementations.
//!
//! - `local`: In-memory implementation for the server and tests
pub mod local;

pub use local::LocalRepository;
