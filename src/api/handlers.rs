// Endpoint handlers module
// Pure response producers: nothing from the request is consulted, payloads
// are rebuilt from literals on every call.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{HelloResponse, PingResponse};
use crate::service::ServiceProfile;

/// `/ping` health check
pub fn ping(profile: ServiceProfile) -> Response<Full<Bytes>> {
    let payload = PingResponse {
        status: "ok",
        service: profile.name,
    };
    json_response(StatusCode::OK, &payload)
}

/// `/hello` greeting
pub fn hello(profile: ServiceProfile) -> Response<Full<Bytes>> {
    let payload = HelloResponse {
        message: profile.greeting,
    };
    json_response(StatusCode::OK, &payload)
}
