use thiserror::Error;

/// Everything that can go wrong between "Get Weather" and a rendered reading.
///
/// The `Display` output is the inline message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No city was chosen or typed.
    #[error("Please select a city")]
    MissingSelection,

    /// The weather service answered with a non-success status.
    #[error("City not found")]
    NotFound { status: u16 },

    /// The request could not be sent, or the body was not JSON.
    #[error("{0}")]
    Transport(String),

    /// The body was JSON but did not have the expected shape.
    #[error("Malformed weather response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_hides_status_from_message() {
        let err = FetchError::NotFound { status: 401 };
        assert_eq!(err.to_string(), "City not found");
    }

    #[test]
    fn transport_message_is_verbatim() {
        let err = FetchError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn malformed_mentions_detail() {
        let err = FetchError::MalformedResponse("missing field `main`".into());
        assert!(err.to_string().contains("missing field `main`"));
    }
}
