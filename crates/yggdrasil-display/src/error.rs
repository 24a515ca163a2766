use yggdrasil_core::ErrorKind;

use crate::Locale;

/// Errors from display resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// The catalog has no entry for this kind
    ///
    /// Only reachable when a kind is added without a matching catalog entry.
    #[error("no display message for error kind `{kind}` in locale `{locale}`")]
    UnmappedKind {
        /// Kind that was looked up
        kind: ErrorKind,
        /// Locale whose catalog was searched
        locale: Locale,
    },
}
