//! Route table module
//!
//! The fixed path-to-handler dispatch table: built once at startup and never
//! mutated afterwards.

use std::collections::HashMap;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::api::handlers;
use crate::service::ServiceProfile;

/// A pure response-producing function registered under a path.
pub type Handler = fn(ServiceProfile) -> Response<Full<Bytes>>;

/// Fixed dispatch table mapping exact request paths to handlers.
pub struct RouteTable {
    routes: HashMap<&'static str, Handler>,
}

impl RouteTable {
    /// Build the table with the two service endpoints.
    pub fn new() -> Self {
        let mut routes: HashMap<&'static str, Handler> = HashMap::new();
        routes.insert("/ping", handlers::ping);
        routes.insert("/hello", handlers::hello);
        Self { routes }
    }

    /// Exact-match lookup.
    ///
    /// Callers pass the URI path without the query string; a trailing slash
    /// is a different, unregistered path.
    pub fn lookup(&self, path: &str) -> Option<Handler> {
        self.routes.get(path).copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ALPHA;

    #[test]
    fn test_lookup_registered_paths() {
        let table = RouteTable::new();
        assert!(table.lookup("/ping").is_some());
        assert!(table.lookup("/hello").is_some());
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = RouteTable::new();
        assert!(table.lookup("/ping/").is_none());
        assert!(table.lookup("/pingx").is_none());
        assert!(table.lookup("/").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_table_has_exactly_two_routes() {
        let table = RouteTable::new();
        assert_eq!(table.routes.len(), 2);
    }

    #[test]
    fn test_registered_handler_produces_ok() {
        let table = RouteTable::new();
        let handler = table.lookup("/ping").unwrap();
        assert_eq!(handler(ALPHA).status(), 200);
    }
}
