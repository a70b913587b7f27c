//! HTTP protocol layer module
//!
//! Protocol-level base functionality, decoupled from the endpoint handlers.

pub mod response;

// Re-export commonly used types
pub use response::build_404_response;
