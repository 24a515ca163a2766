use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Classified cause of an authentication failure
///
/// Serialized as a `snake_case` tag (e.g. `"rate_limited"`). The variant
/// order is not part of the wire format and must not be relied upon.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Request used the wrong HTTP method for the endpoint
    MethodNotAllowed,
    /// Endpoint does not exist (it moved or was removed)
    NotFound,
    /// Account was migrated and must sign in with its new credentials
    UserMigrated,
    /// Username or password is wrong
    InvalidCredentials,
    /// Too many login attempts
    RateLimited,
    /// Access token is invalid or expired
    InvalidToken,
    /// Access token already has a profile selected
    AccessTokenHasProfile,
    /// Username or password was not submitted
    CredentialsMissing,
    /// Invalid salt version
    InvalidSaltVersion,
    /// Request body was not sent as JSON
    UnsupportedMediaType,
    /// Endpoint or resource is permanently gone
    Gone,
    /// Service could not be reached. Set by the transport, never classified.
    Unreachable,
    /// Account does not own the game. Set by callers, never classified.
    NotPaid,
    /// No classification rule matched
    Unknown,
}

impl ErrorKind {
    /// Whether this error points at a defect in the calling client
    ///
    /// Internal errors come from a malformed request or an unannounced API
    /// change rather than from the user or a transient service condition, and
    /// should be reported to developers instead of shown as ordinary errors.
    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed
                | Self::NotFound
                | Self::AccessTokenHasProfile
                | Self::CredentialsMissing
                | Self::InvalidSaltVersion
                | Self::UnsupportedMediaType
        )
    }

    /// Stable string tag for this kind
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Whether `kind` points at a defect in the calling client
pub const fn is_internal(kind: ErrorKind) -> bool {
    kind.is_internal()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn internal_kinds_are_exactly_the_client_defects() {
        let internal: Vec<_> = ErrorKind::iter().filter(|k| is_internal(*k)).collect();

        assert_eq!(
            internal,
            vec![
                ErrorKind::MethodNotAllowed,
                ErrorKind::NotFound,
                ErrorKind::AccessTokenHasProfile,
                ErrorKind::CredentialsMissing,
                ErrorKind::InvalidSaltVersion,
                ErrorKind::UnsupportedMediaType,
            ]
        );
    }

    #[test]
    fn sentinel_and_manual_kinds_are_not_internal() {
        assert!(!ErrorKind::Unknown.is_internal());
        assert!(!ErrorKind::NotPaid.is_internal());
        assert!(!ErrorKind::Unreachable.is_internal());
    }

    #[test]
    fn serializes_as_named_tag() {
        assert_eq!(serde_json::to_string(&ErrorKind::RateLimited).unwrap(), "\"rate_limited\"");
        assert_eq!(
            serde_json::from_str::<ErrorKind>("\"access_token_has_profile\"").unwrap(),
            ErrorKind::AccessTokenHasProfile
        );
    }

    #[test]
    fn string_tags_agree_with_serde() {
        for kind in ErrorKind::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            assert_eq!(kind.as_str(), kind.to_string());
            assert_eq!(ErrorKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn rejects_ordinals() {
        assert!(serde_json::from_str::<ErrorKind>("4").is_err());
    }
}
