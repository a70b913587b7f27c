//! HTTP response building module
//!
//! Builders for responses that are not tied to a specific endpoint.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the stack-default 404 Not Found response.
///
/// Every unmatched path falls through to this fixed response; nothing from
/// the request is echoed back.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_404_response_shape() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"404 Not Found");
    }
}
