//! Entry point for the beta service.

use rust_apiserver::run;
use rust_apiserver::service;

#[tokio::main]
async fn main() {
    run(service::BETA).await;
}
