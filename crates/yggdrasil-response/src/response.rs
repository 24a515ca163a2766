use http::StatusCode;
use yggdrasil_core::{ErrorKind, RawErrorBody, classify};
use yggdrasil_display::{DisplayError, DisplayMessage, Locale, resolve_in};

use crate::AuthFailure;

/// Whether a call succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The call returned its payload
    Success,
    /// The call failed and carries a classification
    Error,
}

/// Result of a call to the authentication service
#[derive(Debug, Clone)]
pub struct AuthResponse<T> {
    outcome: Outcome<T>,
}

#[derive(Debug, Clone)]
enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

#[derive(Debug, Clone)]
struct Failure {
    kind: ErrorKind,
    status: Option<StatusCode>,
    body: Option<RawErrorBody>,
}

impl<T> AuthResponse<T> {
    /// Successful call carrying its decoded payload
    pub const fn success(data: T) -> Self {
        Self {
            outcome: Outcome::Success(data),
        }
    }

    /// Classify the body of a failed HTTP response
    ///
    /// Bodies that are not a JSON object classify as [`ErrorKind::Unknown`].
    /// Fields of an object are read leniently, so a null or non-string
    /// `errorMessage` still lets `error` decide the kind. Client defects are
    /// logged at `error` level so they reach developers rather than only the
    /// user.
    pub fn from_error_body(status: StatusCode, body: &[u8]) -> Self {
        let raw = match serde_json::from_slice::<RawErrorBody>(body) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %e,
                    "unparsable error body from authentication service"
                );

                return Self::failure(ErrorKind::Unknown, Some(status), None);
            }
        };

        let kind = classify(&raw);

        if kind.is_internal() {
            tracing::error!(
                %kind,
                status = status.as_u16(),
                error = %raw.error,
                error_message = %raw.error_message,
                cause = ?raw.cause,
                "authentication request rejected because of a client defect"
            );
        } else {
            tracing::debug!(
                %kind,
                status = status.as_u16(),
                error = %raw.error,
                "authentication request failed"
            );
        }

        Self::failure(kind, Some(status), Some(raw))
    }

    /// The service could not be reached
    pub fn unreachable() -> Self {
        tracing::debug!("authentication service unreachable");
        Self::with_error_kind(ErrorKind::Unreachable)
    }

    /// The account does not own the game
    ///
    /// The service reports this with a successful status, so callers detect
    /// it themselves and build the failure here.
    pub const fn not_paid() -> Self {
        Self::with_error_kind(ErrorKind::NotPaid)
    }

    /// Failure with a classification chosen by the caller
    pub const fn with_error_kind(kind: ErrorKind) -> Self {
        Self::failure(kind, None, None)
    }

    const fn failure(kind: ErrorKind, status: Option<StatusCode>, body: Option<RawErrorBody>) -> Self {
        Self {
            outcome: Outcome::Failure(Failure { kind, status, body }),
        }
    }

    /// Whether the call succeeded or failed
    pub const fn status(&self) -> ResponseStatus {
        match self.outcome {
            Outcome::Success(_) => ResponseStatus::Success,
            Outcome::Failure(_) => ResponseStatus::Error,
        }
    }

    /// `true` if the call returned its payload
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Payload of a successful call
    pub const fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Classified cause, `None` on success
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.kind),
        }
    }

    /// Whether the failure points at a client defect, `None` on success
    pub const fn is_internal(&self) -> Option<bool> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.kind.is_internal()),
        }
    }

    /// HTTP status of the failed response, if one was received
    pub const fn http_status(&self) -> Option<StatusCode> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => failure.status,
        }
    }

    /// Decoded error body of the failed response
    pub const fn error_body(&self) -> Option<&RawErrorBody> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => failure.body.as_ref(),
        }
    }

    /// Message to show the user, `None` on success
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnmappedKind`] if the locale's catalog has no
    /// entry for the classified kind
    pub fn display_in(&self, locale: Locale) -> Result<Option<DisplayMessage>, DisplayError> {
        self.error_kind().map(|kind| resolve_in(locale, kind)).transpose()
    }

    /// Convert into the payload or the classified failure
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] if the call failed
    pub fn into_result(self) -> Result<T, AuthFailure> {
        match self.outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(failure) => Err(AuthFailure {
                kind: failure.kind,
                status: failure.status.as_ref().map(StatusCode::as_u16),
            }),
        }
    }
}
