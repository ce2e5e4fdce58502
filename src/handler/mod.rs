//! Request handler module
//!
//! Dispatches each request by HTTP method: POST goes to the echo handler,
//! GET to the lookup handler, anything else is refused.

pub mod echo;
pub mod lookup;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
