//! Repository trait and error types.

pub mod dataset;
pub mod error;

pub use dataset::{BookingRepository, Dataset, NewDataset};
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
