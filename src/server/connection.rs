// Connection handling module
// Serves a single accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::handler;
use crate::logger;
use crate::routing::RouteTable;
use crate::service::ServiceProfile;

/// Serve a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves HTTP/1.1 requests on it with the request handler
/// 3. Logs connection-level errors without taking the server down
///
/// # Arguments
///
/// * `stream` - The accepted TCP stream
/// * `routes` - Shared route table
/// * `profile` - Identity of the service answering on this listener
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    routes: Arc<RouteTable>,
    profile: ServiceProfile,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&routes), profile)),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
