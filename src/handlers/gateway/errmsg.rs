//! Error message constants for gateway responses.
//!
//! Messages for infrastructure failures are sanitized so backend addresses
//! and store errors never reach HTTP clients. Full details are logged.

/// Backend could not be reached.
pub const SERVICE_UNAVAILABLE: &str = "Service temporarily unavailable";

/// Backend failed while handling the call.
pub const INTERNAL_ERROR: &str = "Internal service error";
