use crate::aggregation::session::SessionConfig;
use crate::defaults;
use crate::error::Result;
use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub aggregation: AggregationConfig,
    pub lexicon: LexiconConfig,
}

/// Aggregation tuning configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggregationConfig {
    pub window_capacity: usize,
    pub confidence_threshold: f64,
    pub absence_close_ms: u64,
    pub word_length_cap: usize,
    pub word_elapsed_cap_ms: u64,
    pub correction_similarity_threshold: f64,
}

/// Lexicon source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Word-per-line file to load. The built-in list is used when unset.
    pub path: Option<PathBuf>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window_capacity: defaults::WINDOW_CAPACITY,
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
            absence_close_ms: defaults::ABSENCE_CLOSE_MS,
            word_length_cap: defaults::WORD_LENGTH_CAP,
            word_elapsed_cap_ms: defaults::WORD_ELAPSED_CAP_MS,
            correction_similarity_threshold: defaults::CORRECTION_SIMILARITY_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Self::default()
                } else {
                    panic!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SIGNSTREAM_LEXICON → lexicon.path
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("SIGNSTREAM_LEXICON")
            && !path.is_empty()
        {
            self.lexicon.path = Some(PathBuf::from(path));
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/signstream/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("signstream")
            .join("config.toml")
    }

    /// Session configuration derived from the aggregation section.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            window_capacity: self.aggregation.window_capacity,
            confidence_threshold: self.aggregation.confidence_threshold,
            absence_close_ms: self.aggregation.absence_close_ms,
            word_length_cap: self.aggregation.word_length_cap,
            word_elapsed_cap_ms: self.aggregation.word_elapsed_cap_ms,
            correction_similarity_threshold: self.aggregation.correction_similarity_threshold,
        }
    }

    /// Builds the lexicon this configuration points at.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon.path {
            Some(path) => Lexicon::from_file(path),
            None => Ok(Lexicon::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to serialize tests that modify environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // SAFETY: These helpers are only used in tests with ENV_LOCK held,
    // ensuring no concurrent access to environment variables.
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    #[test]
    fn test_default_config_has_correct_values() {
        let config = Config::default();

        assert_eq!(config.aggregation.window_capacity, 7);
        assert_eq!(config.aggregation.confidence_threshold, 0.70);
        assert_eq!(config.aggregation.absence_close_ms, 500);
        assert_eq!(config.aggregation.word_length_cap, 5);
        assert_eq!(config.aggregation.word_elapsed_cap_ms, 3000);
        assert_eq!(config.aggregation.correction_similarity_threshold, 0.70);
        assert_eq!(config.lexicon.path, None);
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[aggregation]").unwrap();
        writeln!(file, "word_length_cap = 8").unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.aggregation.word_length_cap, 8);
        assert_eq!(config.aggregation.window_capacity, 7);
        assert_eq!(config.aggregation.absence_close_ms, 500);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid = toml =").unwrap();
        file.flush().unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/signstream.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_override_lexicon_path() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env("SIGNSTREAM_LEXICON", "/data/words.txt");

        let config = Config::default().with_env_overrides();
        assert_eq!(config.lexicon.path, Some(PathBuf::from("/data/words.txt")));

        remove_env("SIGNSTREAM_LEXICON");
    }

    #[test]
    fn test_env_override_empty_value_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env("SIGNSTREAM_LEXICON", "");

        let config = Config::default().with_env_overrides();
        assert_eq!(config.lexicon.path, None);

        remove_env("SIGNSTREAM_LEXICON");
    }

    #[test]
    fn test_session_config_mirrors_aggregation_section() {
        let mut config = Config::default();
        config.aggregation.window_capacity = 9;
        config.aggregation.word_elapsed_cap_ms = 5000;

        let session = config.session_config();
        assert_eq!(session.window_capacity, 9);
        assert_eq!(session.word_elapsed_cap_ms, 5000);
        assert_eq!(session.word_length_cap, 5);
    }

    #[test]
    fn test_build_lexicon_defaults_to_builtin() {
        let config = Config::default();
        let lexicon = config.build_lexicon().unwrap();
        assert!(lexicon.contains("hello"));
    }

    #[test]
    fn test_build_lexicon_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "beta").unwrap();
        file.flush().unwrap();

        let config = Config {
            lexicon: LexiconConfig {
                path: Some(file.path().to_path_buf()),
            },
            ..Default::default()
        };
        let lexicon = config.build_lexicon().unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("alpha"));
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
