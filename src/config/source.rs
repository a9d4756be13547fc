//! Declaration Sources
//!
//! Where the raw storage declaration string comes from: an inline value,
//! an environment variable, or a mounted config file.

use crate::config::parser::ConfigParser;
use crate::domain::StorageVolumeSpec;
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Default environment variable holding the declaration
pub const DEFAULT_CONFIG_ENV: &str = "STORAGE_CONFIG";

/// Source of a storage declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Declaration given directly
    Inline(String),
    /// Name of an environment variable holding the declaration
    Env(String),
    /// File containing the declaration
    File(PathBuf),
}

impl ConfigSource {
    /// Read the raw declaration string
    pub fn load(&self) -> Result<String> {
        let raw = match self {
            ConfigSource::Inline(raw) => raw.clone(),
            ConfigSource::Env(var) => std::env::var(var).map_err(|e| {
                Error::Configuration(format!("Environment variable {}: {}", var, e))
            })?,
            ConfigSource::File(path) => std::fs::read_to_string(path)?,
        };

        debug!("Loaded storage declaration from {} ({} bytes)", self, raw.len());
        Ok(raw)
    }

    /// Read and parse the declaration
    pub fn load_and_parse(&self) -> Result<Vec<StorageVolumeSpec>> {
        ConfigParser::parse(&self.load()?)
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Env(DEFAULT_CONFIG_ENV.to_string())
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Inline(_) => write!(f, "inline value"),
            ConfigSource::Env(var) => write!(f, "env ${}", var),
            ConfigSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StorageMedium;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_inline_source() {
        let source = ConfigSource::Inline("/data.SSD,100".into());
        let specs = source.load_and_parse().unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].medium, StorageMedium::Ssd);
        assert_eq!(specs[0].capacity, Some(100));
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "/home/disk1/palo,capacity:50;").unwrap();
        writeln!(file, "/home/disk2/palo,medium:ssd").unwrap();

        let source = ConfigSource::File(file.path().to_path_buf());
        let specs = source.load_and_parse().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].mount_path, "/home/disk2/palo");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::File(dir.path().join("absent.conf"));
        let err = source.load().unwrap_err();
        assert_matches!(err, Error::Io(_));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_env_source() {
        let var = "STORAGE_VOLUME_RESOLVER_TEST_CONFIG";
        std::env::set_var(var, "/path1;/path2");
        let specs = ConfigSource::Env(var.into()).load_and_parse().unwrap();
        assert_eq!(specs.len(), 2);

        let missing = ConfigSource::Env("STORAGE_VOLUME_RESOLVER_TEST_UNSET".into());
        assert_matches!(missing.load(), Err(Error::Configuration(_)));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::default().to_string(), "env $STORAGE_CONFIG");
        assert_eq!(ConfigSource::Inline("/x".into()).to_string(), "inline value");
    }
}
