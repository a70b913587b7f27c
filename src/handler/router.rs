//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route lookup, dispatch and the
//! not-found fallback.

use crate::http;
use crate::logger;
use crate::routing::RouteTable;
use crate::service::ServiceProfile;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// The method is deliberately not consulted: a registered path serves the
/// same fixed payload for any method, and HEAD body suppression is handled
/// by hyper's connection layer. Lookup uses the URI path only, so a query
/// string does not affect dispatch.
// service_fn wants a future that owns everything it touches
#[allow(clippy::unused_async, clippy::needless_pass_by_value)]
pub async fn handle_request(
    req: Request<Incoming>,
    routes: Arc<RouteTable>,
    profile: ServiceProfile,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let version = req.version();

    let response = match routes.lookup(path) {
        Some(handler) => handler(profile),
        None => http::build_404_response(),
    };

    logger::log_request(method, path, version, response.status());

    Ok(response)
}
