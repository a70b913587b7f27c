//! Routing module
//!
//! A static dispatch table: a fixed associative mapping from route string to
//! a handler, initialized once at startup.

mod table;

pub use table::{Handler, RouteTable};
