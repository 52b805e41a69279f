use reqwest::StatusCode;

/// Raised when the meme service answers with a non-success status.
///
/// The body of the failed response is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: &'static str,
    pub status: StatusCode,
}

impl RequestError {
    pub fn new(message: &'static str, status: StatusCode) -> Self {
        Self { message, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_fixed_message_only() {
        let error = RequestError::new("Failed to search by text", StatusCode::BAD_GATEWAY);

        assert_eq!(error.to_string(), "Failed to search by text");
        assert_eq!(error.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_can_be_recovered_from_anyhow() {
        let error: anyhow::Error =
            RequestError::new("Failed to fetch random meme", StatusCode::NOT_FOUND).into();

        let request_error = error.downcast_ref::<RequestError>().unwrap();
        assert_eq!(request_error.status, StatusCode::NOT_FOUND);
    }
}
