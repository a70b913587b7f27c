//! Logger module
//!
//! Stdout/stderr logging for server lifecycle events and per-request access
//! lines. Every line carries a local timestamp.

use chrono::Local;
use hyper::{Method, StatusCode, Version};
use std::net::SocketAddr;

use crate::service::ServiceProfile;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format one access-log line: request line plus the response status.
fn format_access_line(method: &Method, path: &str, version: Version, status: StatusCode) -> String {
    let ts = timestamp();
    let status = status.as_u16();
    format!("[{ts}] \"{method} {path} {version:?}\" {status}")
}

pub fn log_server_start(addr: &SocketAddr, profile: &ServiceProfile) {
    println!("======================================");
    println!("Starting {} service", profile.name);
    println!("Listening on: http://{addr}");
    println!("Serving /ping and /hello");
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_request(method: &Method, path: &str, version: Version, status: StatusCode) {
    println!("{}", format_access_line(method, path, version, status));
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_accept_error(err: &std::io::Error) {
    log_error(&format!("Failed to accept connection: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

/// Fatal bind failures are logged here right before the process exits.
pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[{}] [FATAL] Failed to bind {addr}: {err}", timestamp());
}
