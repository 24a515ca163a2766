//! Response envelope for calls to the authentication service
//!
//! The transport hands failed responses to [`AuthResponse::from_error_body`],
//! which decodes and classifies the body and logs client defects.

#![allow(clippy::must_use_candidate)]

mod error;
mod response;

pub use error::AuthFailure;
pub use response::{AuthResponse, ResponseStatus};
pub use yggdrasil_core::{ErrorKind, RawErrorBody};
pub use yggdrasil_display::{DisplayError, DisplayMessage, Locale};
