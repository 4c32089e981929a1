//! Run configuration, optionally loaded from a TOML file.
//!
//! Every field has a default, so an absent file and an empty file behave the
//! same: `/`-delimited values, Finnish labels, logging to `vocab.log`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::vocab::{BuildOptions, DEFAULT_DELIMITER, DEFAULT_LABEL_LANGUAGE};

/// Settings that shape a run but are not part of the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabConfig {
    /// Separator between tokens inside one literal.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Language tag of `skos:prefLabel` literals.
    #[serde(default = "default_label_language")]
    pub label_language: String,
    /// Append-only diagnostic log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Base IRI for resolving relative IRIs in the input.
    #[serde(default)]
    pub base_iri: Option<String>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.into()
}
fn default_label_language() -> String {
    DEFAULT_LABEL_LANGUAGE.into()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("vocab.log")
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            label_language: default_label_language(),
            log_file: default_log_file(),
            base_iri: None,
        }
    }
}

impl VocabConfig {
    /// Load from `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Builder options derived from this config.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            delimiter: self.delimiter.clone(),
            label_language: self.label_language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = VocabConfig::from_toml("").unwrap();
        assert_eq!(config, VocabConfig::default());
        assert_eq!(config.build_options(), BuildOptions::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = VocabConfig::from_toml(
            r#"
            delimiter = ";"
            label_language = "sv"
            log_file = "/tmp/literal-vocab.log"
            base_iri = "http://example.org/base/"
            "#,
        )
        .unwrap();
        assert_eq!(config.delimiter, ";");
        assert_eq!(config.label_language, "sv");
        assert_eq!(config.log_file, PathBuf::from("/tmp/literal-vocab.log"));
        assert_eq!(config.base_iri.as_deref(), Some("http://example.org/base/"));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(VocabConfig::from_toml("mapping = \"x.csv\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = VocabConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_reads_file_and_reports_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "label_language = \"en\"\n").unwrap();
        assert_eq!(VocabConfig::load(&good).unwrap().label_language, "en");

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "delimiter = \n").unwrap();
        let err = VocabConfig::load(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        assert_eq!(VocabConfig::load_or_default(None).unwrap(), VocabConfig::default());
    }
}
