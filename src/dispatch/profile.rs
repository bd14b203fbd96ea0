//! Saved dispatch settings loaded from a YAML profile.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Dispatch settings persisted as YAML.
///
/// Every field is optional; explicit command-line flags win over profile
/// values. `headers` holds the same line-oriented `Key: Value` text the
/// flags carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendProfile {
    /// Destination URL.
    #[serde(default)]
    pub url: Option<String>,
    /// HTTP method.
    #[serde(default)]
    pub method: Option<String>,
    /// Extra header lines, one `Key: Value` per line.
    #[serde(default)]
    pub headers: Option<String>,
    /// Bearer token.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Worker count.
    #[serde(default)]
    pub concurrency: Option<usize>,
    /// Per-request delay in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl SendProfile {
    /// Loads a profile from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read profile {}: {e}", path.display()))?;
        serde_yaml::from_str(&text)
            .map_err(|e| format!("Failed to parse profile {}: {e}", path.display()))
    }
}
