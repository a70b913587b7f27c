// API payload types module
// The two wire payloads: key order on the wire follows field declaration
// order, so /ping always serializes status before service.

use serde::Serialize;

/// Body served on `/ping`
#[derive(Debug, Serialize)]
pub struct PingResponse {
    /// Always `"ok"`
    pub status: &'static str,
    /// Instance name (`"alpha"` / `"beta"`)
    pub service: &'static str,
}

/// Body served on `/hello`
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Fixed greeting of the instance
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_key_order_is_fixed() {
        let payload = PingResponse {
            status: "ok",
            service: "alpha",
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"status":"ok","service":"alpha"}"#
        );
    }

    #[test]
    fn test_hello_encoding_is_compact() {
        let payload = HelloResponse {
            message: "Hello from Alpha (Go)",
        };
        // Compact encoding: no spaces, no trailing newline
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"message":"Hello from Alpha (Go)"}"#
        );
    }
}
