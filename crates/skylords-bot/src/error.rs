//! Unified error type for the bot server.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use skylords_protocol::ProtocolError;
use skylords_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attributes let `?` convert sub-crate errors, and the
/// [`ResponseError`] impl turns any of them into an HTTP reply with a
/// `{"error": "..."}` body.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// A request or response body could not be (de)serialized.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The session refused the request.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Binding or running the HTTP server failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A bot callback panicked on the blocking pool.
    #[error("bot callback failed: {0}")]
    Callback(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for BotError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Protocol(ProtocolError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Protocol(_) => StatusCode::BAD_REQUEST,
            Self::Session(err) => match err {
                SessionError::VersionMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SessionError::Rejected => StatusCode::CONFLICT,
                SessionError::UnknownDeck(_)
                | SessionError::UnexpectedPhase { .. }
                | SessionError::StaleTick { .. } => StatusCode::BAD_REQUEST,
                // Only the bot's own decks fail to encode here.
                SessionError::Protocol(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Io(_) | Self::Callback(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request refused");
        }
        HttpResponse::build(status).json(ErrorResponse { error: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylords_protocol::{DeckError, Tick};
    use skylords_session::Phase;

    #[test]
    fn test_from_protocol_error() {
        let err: BotError = ProtocolError::InvalidMessage("bad".into()).into();
        assert!(matches!(err, BotError::Protocol(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_version_mismatch_is_unprocessable() {
        let err: BotError = SessionError::VersionMismatch { expected: 16, got: 15 }.into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("expected 16, got 15"));
    }

    #[test]
    fn test_caller_errors_are_bad_request() {
        let errors = [
            SessionError::UnknownDeck("Nope".into()),
            SessionError::UnexpectedPhase { phase: Phase::Negotiated, expected: Phase::Running },
            SessionError::StaleTick { last: Tick(4), got: Tick(2) },
        ];
        for err in errors {
            assert_eq!(BotError::from(err).status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_rejected_session_is_conflict() {
        assert_eq!(BotError::from(SessionError::Rejected).status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_bot_deck_is_server_error() {
        let err = BotError::from(SessionError::from(ProtocolError::from(DeckError::EmptyDeck)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
