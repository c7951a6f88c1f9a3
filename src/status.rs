//! Health status for the liveness endpoint.

use serde::Serialize;

/// Payload returned by the health endpoint, built fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: String,
}

/// Returns the service health status.
///
/// Pure and stateless: the process answering at all is the health signal,
/// so the status is always "ok".
pub fn status() -> Health {
    Health {
        status: "ok".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_ok() {
        assert_eq!(status().status, "ok");
    }

    #[test]
    fn repeated_calls_serialize_identically() {
        let first = serde_json::to_string(&status()).unwrap();
        let second = serde_json::to_string(&status()).unwrap();

        assert_eq!(first, r#"{"status":"ok"}"#);
        assert_eq!(first, second);
    }
}
