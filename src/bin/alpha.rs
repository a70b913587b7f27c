//! Entry point for the alpha service.

use rust_apiserver::run;
use rust_apiserver::service;

#[tokio::main]
async fn main() {
    run(service::ALPHA).await;
}
