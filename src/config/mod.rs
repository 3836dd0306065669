//! Engine tuning configuration
//!
//! Loads optional tuning knobs from a `candor.toml` file:
//!
//! ```toml
//! # candor.toml
//!
//! [analysis]
//! intensifier_window_chars = 20
//! cluster_window_words = 50
//! min_cluster_size = 3
//! context_chars = 50
//! ```
//!
//! A missing file yields the defaults; a malformed file logs a warning
//! and yields the defaults rather than failing the run.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Default config file name looked up next to the input
pub const CONFIG_FILE_NAME: &str = "candor.toml";

/// Tuning knobs for the analysis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Bytes of normalized text inspected before a match for intensifiers
    pub intensifier_window_chars: usize,
    /// Word-distance window for the clustering bonus
    pub cluster_window_words: usize,
    /// Minimum flags in a local cluster before the bonus applies
    pub min_cluster_size: usize,
    /// Bytes of original text kept before and after a match in snippets
    pub context_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intensifier_window_chars: 20,
            cluster_window_words: 50,
            min_cluster_size: 3,
            context_chars: 50,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analysis: EngineConfig,
}

/// Load engine config from `path`, falling back to defaults.
pub fn load_config(path: &Path) -> EngineConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!(path = %path.display(), "no config file, using defaults");
            return EngineConfig::default();
        }
    };

    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(path = %path.display(), "loaded engine config");
            file.analysis
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "malformed config file, using defaults"
            );
            EngineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.intensifier_window_chars, 20);
        assert_eq!(config.cluster_window_words, 50);
        assert_eq!(config.min_cluster_size, 3);
        assert_eq!(config.context_chars, 50);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/candor.toml"));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_some_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "[analysis]\ncluster_window_words = 25").expect("write config");

        let config = load_config(&path);
        assert_eq!(config.cluster_window_words, 25);
        assert_eq!(config.intensifier_window_chars, 20);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not [valid toml").expect("write config");
        assert_eq!(load_config(&path), EngineConfig::default());
    }
}
