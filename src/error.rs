//! Error types surfaced to the views.
//!
//! Authentication failures are collapsed into the two generic messages the login and
//! register forms display. Everything else travels as an [`ApiError`] into the page's
//! [`LoadState`](crate::load::LoadState) so the view can show it inline.

use thiserror::Error;

/// Failure of a call to the finance API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the session token.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("Could not read server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status to an error.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status { status }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Failure of a login or registration attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Registration failed")]
    RegistrationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_render_the_form_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::RegistrationFailed.to_string(), "Registration failed");
    }

    #[test]
    fn status_401_is_unauthorized() {
        assert!(ApiError::from_status(401).is_unauthorized());
        assert_eq!(ApiError::from_status(500), ApiError::Status { status: 500 });
        assert!(!ApiError::from_status(403).is_unauthorized());
    }

    #[test]
    fn decode_errors_keep_the_serde_message() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
