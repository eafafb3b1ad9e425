//! CLI defaults loaded from an optional TOML file, grounded on the
//! `cqs` example's layered `Config::load`.

use std::path::Path;

use serde::Deserialize;

use crate::error::CoreResult;
use crate::model::Algorithm;

/// User-tunable defaults. Every field has a built-in default so a missing or
/// partial config file is never an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub algorithm: Algorithm,
    pub top_n: usize,
    pub fuzzy_threshold: usize,
    pub corpus_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Ac,
            top_n: 10,
            fuzzy_threshold: crate::model::Query::DEFAULT_FUZZY_THRESHOLD,
            corpus_dir: "corpus".to_string(),
        }
    }
}

impl Config {
    /// Loads a config file if present; falls back to defaults otherwise.
    /// A present-but-malformed file is still an error — silence is only for
    /// "the file doesn't exist".
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|err| crate::error::CoreError::InvalidInput(format!("malformed config: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/ats-core.toml")).unwrap();
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let dir = std::env::temp_dir().join(format!("ats-core-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ats-core.toml");
        std::fs::write(&path, "top_n = 25\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.top_n, 25);
        assert_eq!(config.fuzzy_threshold, 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
