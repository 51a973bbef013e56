use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::config::AppConfig;

/// File name looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "taskrow.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config named on the command line, or `taskrow.toml` in `dir` if
/// present, or defaults. An explicitly named file must exist.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading config");
        return read_config(path);
    }
    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        info!(path = %default_path.display(), "loading config");
        read_config(&default_path)
    } else {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[ui]
title = "Chores"

[[tasks]]
title = "Buy milk"

[[tasks]]
title = "Walk dog"
done = true
"#;

    #[test]
    fn reads_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = load_config(Some(&path), tmp.path()).unwrap();
        assert_eq!(config.ui.title, "Chores");
        assert_eq!(config.tasks.len(), 2);
        assert!(config.tasks[1].done);
    }

    #[test]
    fn finds_default_file_in_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DEFAULT_CONFIG_FILE), SAMPLE).unwrap();

        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.tasks[0].title, "Buy milk");
    }

    #[test]
    fn missing_default_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.ui.title, "Tasks");
        assert!(config.tasks.is_empty());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[[tasks]]\ndone = true\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
