use serde::Serialize;

/// Title and description shown to the user for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMessage {
    /// Short heading
    pub title: &'static str,
    /// Longer explanation of what went wrong and what to do
    pub description: &'static str,
}

impl DisplayMessage {
    pub(crate) const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}
