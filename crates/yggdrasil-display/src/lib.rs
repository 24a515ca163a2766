//! Display messages for classified authentication errors
//!
//! Every [`ErrorKind`] maps to a fixed, pre-translated title and description
//! per [`Locale`]. Lookups go through static tables; a kind missing from a
//! table is reported as [`DisplayError::UnmappedKind`].

#![allow(clippy::must_use_candidate)]

mod catalog;
mod error;
mod locale;
mod message;

pub use error::DisplayError;
pub use locale::Locale;
pub use message::DisplayMessage;
use yggdrasil_core::ErrorKind;

/// Resolve the message for `kind` in the default locale
///
/// # Errors
///
/// Returns [`DisplayError::UnmappedKind`] if the catalog has no entry for `kind`
pub fn resolve(kind: ErrorKind) -> Result<DisplayMessage, DisplayError> {
    resolve_in(Locale::default(), kind)
}

/// Resolve the message for `kind` in `locale`
///
/// # Errors
///
/// Returns [`DisplayError::UnmappedKind`] if the catalog has no entry for `kind`
pub fn resolve_in(locale: Locale, kind: ErrorKind) -> Result<DisplayMessage, DisplayError> {
    catalog::lookup(locale.catalog(), kind).ok_or(DisplayError::UnmappedKind { kind, locale })
}
