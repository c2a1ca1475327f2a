//! Search settings.
//!
//! Loaded from an optional YAML file and overridden by command-line flags.
//!
//! ```yaml
//! excerpt_chars: 120
//! follow_links: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LookupError, LookupResult};
use crate::excerpt::DEFAULT_EXCERPT_CHARS;

/// Settings for one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Excerpt cap in characters.
    pub excerpt_chars: usize,
    /// Follow symbolic links while walking the notes directory.
    pub follow_links: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            follow_links: false,
        }
    }
}

impl SearchConfig {
    /// Load settings from a YAML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] if the file cannot be read or is not
    /// valid settings YAML.
    pub fn load(path: &Path) -> LookupResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| LookupError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let config = Self::from_yaml(&raw).map_err(|error| LookupError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded search settings");
        Ok(config)
    }

    /// Parse settings from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error for malformed input or unknown keys.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Override the excerpt cap when `chars` is set.
    #[must_use]
    pub fn with_excerpt_chars(mut self, chars: Option<usize>) -> Self {
        if let Some(chars) = chars {
            self.excerpt_chars = chars;
        }
        self
    }

    /// Override link following when `follow` is set.
    #[must_use]
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links |= follow;
        self
    }
}
