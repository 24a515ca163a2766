use serde::Deserialize;
use yggdrasil_display::Locale;

/// Display configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Language of the user-facing error messages
    #[serde(default)]
    pub locale: Locale,
}
