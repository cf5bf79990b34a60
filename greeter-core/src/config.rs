use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_SURFACE_ID: &str = "root";

/// Page configuration. Every field has a default, so an empty file is valid.
///
/// ```toml
/// surface_id = "root"
/// names = ["Amanda", "Stefano", "Duncan"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    pub surface_id: String,
    pub names: Vec<String>,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            names: ["Amanda", "Stefano", "Duncan"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl GreeterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), names = config.names.len(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(
            GreeterConfig::from_toml_str("").unwrap(),
            GreeterConfig::default()
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = GreeterConfig::from_toml_str("names = []").unwrap();
        assert!(config.names.is_empty());
        assert_eq!(config.surface_id, DEFAULT_SURFACE_ID);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"names = ["Amanda", "Stefano", "Duncan", "Ada"]"#).unwrap();
        let config = GreeterConfig::load(file.path()).unwrap();
        assert_eq!(config.names.len(), 4);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = GreeterConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = GreeterConfig::from_toml_str("names = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
