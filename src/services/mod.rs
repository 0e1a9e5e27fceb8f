//! gRPC service implementations.

pub mod racing;
pub mod sports;

pub use racing::RacingService;
pub use sports::SportsService;

use tonic::Status;
use tracing::error;

use crate::storage::StorageError;

/// Map a storage failure to an internal RPC error, logging the detail.
pub(crate) fn storage_status(domain: &str, operation: &str, e: StorageError) -> Status {
    error!(domain, operation, error = %e, "Storage operation failed");
    Status::internal(format!("Failed to {operation}: {e}"))
}
