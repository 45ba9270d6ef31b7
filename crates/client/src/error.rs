//! Errors from the admin API layer.

/// Errors surfaced by [`crate::gateway::AdminGateway`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    ///
    /// Rendered exactly as the admin console shows it: the literal status
    /// code and status text, with no client-side translation.
    #[error("{status} - {status_text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical status text, e.g. `Internal Server Error`.
        status_text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_renders_literal_code_and_text() {
        let err = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "500 - Internal Server Error");

        let err = ApiError::Status {
            status: 401,
            status_text: "Unauthorized".into(),
        };
        assert_eq!(err.to_string(), "401 - Unauthorized");
    }
}
