//! Provider endpoint and export location, read from the environment.

use std::path::PathBuf;

use common::search_const::DEFAULT_DEVICE_EVENT_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Device event endpoint, without query string.
    pub device_event_url: String,
    /// Directory that fixed-name exports are written into.
    pub export_dir: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            device_event_url: DEFAULT_DEVICE_EVENT_URL.to_string(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            device_event_url: std::env::var("OPENFDA_DEVICE_EVENT_URL")
                .map(|url| url.trim_end_matches(['?', '/']).to_string())
                .unwrap_or(defaults.device_event_url),
            export_dir: std::env::var("MAUDE_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
        }
    }
}
