// Server loop module
// Accepts connections forever and hands each one to the connection handler

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::logger;
use crate::routing::RouteTable;
use crate::service::ServiceProfile;

/// Run the accept loop for a bound listener.
///
/// The route table is built once and shared across all connections. A failed
/// accept is logged and the loop keeps running; this function never returns.
pub async fn start_server_loop(listener: TcpListener, profile: ServiceProfile) {
    let routes = Arc::new(RouteTable::new());

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, Arc::clone(&routes), profile);
            }
            Err(e) => {
                logger::log_accept_error(&e);
            }
        }
    }
}
