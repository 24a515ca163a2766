use crate::{ErrorKind, RawErrorBody};

/// Error names sent in the `error` field
mod error {
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const NOT_FOUND: &str = "Not Found";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "Unsupported Media Type";
    pub const FORBIDDEN_OPERATION: &str = "ForbiddenOperationException";
    pub const ILLEGAL_ARGUMENT: &str = "IllegalArgumentException";
    pub const RESOURCE: &str = "ResourceException";
    pub const GONE: &str = "GoneException";
}

/// Messages sent in the `errorMessage` field
mod message {
    pub const INVALID_USERNAME_OR_PASSWORD: &str = "Invalid credentials. Invalid username or password.";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
    pub const INVALID_TOKEN: &str = "Invalid token.";
    pub const FORBIDDEN: &str = "Forbidden";
    pub const TOKEN_HAS_PROFILE: &str = "Access token already has a profile assigned.";
    pub const INVALID_SALT_VERSION: &str = "Invalid salt version";
}

const USER_MIGRATED_CAUSE: &str = "UserMigratedException";

/// Classify an error body returned by the authentication service
///
/// Matching is exact and case-sensitive. Bodies that match no rule classify
/// as [`ErrorKind::Unknown`]. Never returns [`ErrorKind::NotPaid`] or
/// [`ErrorKind::Unreachable`]; those are set by callers.
pub fn classify(body: &RawErrorBody) -> ErrorKind {
    match body.error.as_str() {
        error::METHOD_NOT_ALLOWED => ErrorKind::MethodNotAllowed,
        error::NOT_FOUND => ErrorKind::NotFound,
        error::UNSUPPORTED_MEDIA_TYPE => ErrorKind::UnsupportedMediaType,
        error::FORBIDDEN_OPERATION => classify_forbidden(body),
        error::ILLEGAL_ARGUMENT => classify_illegal_argument(body),
        error::RESOURCE | error::GONE => ErrorKind::Gone,
        _ => ErrorKind::Unknown,
    }
}

fn classify_forbidden(body: &RawErrorBody) -> ErrorKind {
    // The cause wins over whatever message came with it
    if body.cause.as_deref() == Some(USER_MIGRATED_CAUSE) {
        return ErrorKind::UserMigrated;
    }

    match body.error_message.as_str() {
        message::INVALID_USERNAME_OR_PASSWORD => ErrorKind::InvalidCredentials,
        // The service answers a throttled login with this exact message
        message::INVALID_CREDENTIALS => ErrorKind::RateLimited,
        message::INVALID_TOKEN => ErrorKind::InvalidToken,
        message::FORBIDDEN => ErrorKind::CredentialsMissing,
        _ => ErrorKind::Unknown,
    }
}

fn classify_illegal_argument(body: &RawErrorBody) -> ErrorKind {
    match body.error_message.as_str() {
        message::TOKEN_HAS_PROFILE => ErrorKind::AccessTokenHasProfile,
        message::INVALID_SALT_VERSION => ErrorKind::InvalidSaltVersion,
        _ => ErrorKind::Unknown,
    }
}

impl From<&RawErrorBody> for ErrorKind {
    fn from(body: &RawErrorBody) -> Self {
        classify(body)
    }
}
