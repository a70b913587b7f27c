// API module entry
// Fixed JSON endpoints: payload types, handlers and the response builder

pub mod handlers;
mod response;
mod types;

// Re-export public types
pub use response::json_response;
pub use types::{HelloResponse, PingResponse};
