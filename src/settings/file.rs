//! Settings file and environment sources.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use tracing::debug;

use super::Settings;
use crate::error::Result;

const ENV_PREFIX: &str = "PASSGEN";

/// `<config dir>/passgen/settings.toml`, or `./settings.toml` when the
/// platform has no config directory.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("passgen"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("settings.toml")
}

pub fn load(path: &Path) -> Result<Settings> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    // PASSGEN__MAX_COUNT=20 -> max_count = 20
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: &Path, env: Environment) -> Result<Settings> {
    debug!(path = %path.display(), "Loading settings");

    let settings: Settings = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> std::result::Result<(), ConfigError> {
    if settings.max_count == 0 {
        return Err(ConfigError::Message("max_count cannot be 0".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::Error;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_with_env(&dir.path().join("settings.toml"), env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "length = 20\nspecial = false\nspecial_chars = \"#$\"\noutput_file = \"vault.txt\"\n",
        )
        .unwrap();

        let settings = load_with_env(&path, env(&[])).unwrap();
        assert_eq!(settings.length, 20);
        assert!(!settings.special);
        assert_eq!(settings.special_chars.as_deref(), Some("#$"));
        assert_eq!(settings.output_file, "vault.txt");
        assert_eq!(settings.count, 1);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "length = 20\nmax_count = 10\n").unwrap();

        let settings = load_with_env(
            &path,
            env(&[("PASSGEN__LENGTH", "32"), ("PASSGEN__MAX_COUNT", "50")]),
        )
        .unwrap();
        assert_eq!(settings.length, 32);
        assert_eq!(settings.max_count, 50);
    }

    #[test]
    fn test_zero_max_count_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "max_count = 0\n").unwrap();

        let err = load_with_env(&path, env(&[])).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn test_settings_path_file_name() {
        let path = settings_path();
        assert!(path.ends_with("settings.toml"));
    }
}
