// Dataset-level performance measures
pub mod performance;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
