use yggdrasil_core::ErrorKind;

/// Failed authentication call, as returned by [`AuthResponse::into_result`]
///
/// [`AuthResponse::into_result`]: crate::AuthResponse::into_result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("authentication failed: {kind}")]
pub struct AuthFailure {
    /// Classified cause
    pub kind: ErrorKind,
    /// HTTP status of the failed response, if one was received
    pub status: Option<u16>,
}

impl AuthFailure {
    /// Whether the failure points at a defect in this client
    pub const fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }
}
