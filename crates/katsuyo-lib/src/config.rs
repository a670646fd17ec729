use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::Dirs;

/// Display language for labels and placeholders.
///
/// Threaded explicitly into formatting; core conjugation and lookup logic
/// never consults it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Japanese,
}

/// A configuration used for the application.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display language for labels.
    pub language: Language,
    /// Default lexicon snapshot path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Config {
    /// Load the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        let config = if config_path.exists() {
            let data = std::fs::read_to_string(&config_path)?;
            toml::from_str(&data)?
        } else {
            Self::default()
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config");
        assert_eq!(config.language, Language::English);
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn language_round_trips_in_kebab_case() {
        let config: Config = toml::from_str("language = \"japanese\"").expect("config");
        assert_eq!(config.language, Language::Japanese);

        let rendered = toml::to_string(&config).expect("render");
        assert!(rendered.contains("language = \"japanese\""));
    }
}
