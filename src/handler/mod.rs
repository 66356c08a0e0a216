//! Request handler module
//!
//! Responsible for request routing dispatch and the order query endpoints.

pub mod orders;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
