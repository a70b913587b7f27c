//! Fixed-endpoint JSON API services built on hyper and tokio.
//!
//! Two sibling binaries, `alpha-api` and `beta-api`, share this crate and
//! differ only in the [`service::ServiceProfile`] they run with. Each serves
//! `/ping` and `/hello` with fixed JSON payloads and answers every other
//! path with a plain 404.

pub mod api;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod service;

use service::ServiceProfile;

/// Bind the profile's fixed port and serve until the process is killed.
///
/// A bind failure is fatal: the error is logged and the process exits with
/// status 1, so a second instance on an occupied port dies immediately
/// instead of appearing to run.
pub async fn run(profile: ServiceProfile) {
    let addr = profile.socket_addr();

    let listener = match server::bind_listener(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            std::process::exit(1);
        }
    };

    logger::log_server_start(&addr, &profile);
    server::start_server_loop(listener, profile).await;
}
