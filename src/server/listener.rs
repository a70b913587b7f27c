// Listener module
// Binds the TCP listener for a service

use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind a `TcpListener` on the given address.
///
/// No address reuse options are set, so a second instance binding the same
/// port fails here with `AddrInUse` instead of silently sharing the socket.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully bound listener
/// * `Err(std::io::Error)` - Failed to bind the address
pub async fn bind_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    TcpListener::bind(addr).await
}
