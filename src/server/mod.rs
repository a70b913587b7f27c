// Server module entry
// Provides listener binding, the accept loop and per-connection serving

pub mod connection;
pub mod listener;

// Rust does not allow `loop` as a module name (keyword), use server_loop instead
#[path = "loop.rs"]
pub mod server_loop;

// Re-export common entry points
pub use listener::bind_listener;
pub use server_loop::start_server_loop;
