//! Error classification for the Yggdrasil authentication API
//!
//! Turns the loosely structured error bodies returned by the authentication
//! service into a closed [`ErrorKind`], and tells apart errors caused by the
//! calling client from legitimate user or service conditions.

#![allow(clippy::must_use_candidate)]

mod body;
mod classify;
mod kind;

pub use body::RawErrorBody;
pub use classify::classify;
pub use kind::{ErrorKind, is_internal};
