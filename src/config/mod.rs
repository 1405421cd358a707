mod schema;
mod validation;

pub use schema::{Config, DEFAULT_DAYS_RANGE};
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory first
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Get the config directory path (~/.config/pr-reminder/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("pr-reminder"))
}

/// Resolve which config file to load.
///
/// An explicit path always wins. Otherwise `./config.yaml` is used when it
/// exists, falling back to `~/.config/pr-reminder/config.yaml`.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    get_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

/// Load configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = resolve_config_path(path);
    load_config_from(&config_path)
}

fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Create {} or pass --config",
            config_path.display(),
            CONFIG_FILE_NAME
        );
    }

    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let file = write_config("repos:\n  - acme/widgets\ndays_range: 3\n");
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.repos, vec!["acme/widgets"]);
        assert_eq!(config.days_range, 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = load_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let file = write_config("repos: [acme/widgets\n");
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let explicit = PathBuf::from("/tmp/somewhere/else.yaml");
        assert_eq!(resolve_config_path(Some(explicit.clone())), explicit);
    }
}
