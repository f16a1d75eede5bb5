use std::path::{Path, PathBuf};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_FILENAME;
use crate::error::{CoreError, CoreResult};

/// Environment variable prefix, e.g. `IDENTICARD_EXPORT__OUTPUT_DIR`.
pub const ENV_PREFIX: &str = "IDENTICARD";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "identicard.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory downloads are saved into.
    pub output_dir: PathBuf,
    /// Filename used when the caller does not provide one.
    pub default_filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional TOML file.
    ///
    /// The file at `path` is required when given; otherwise `identicard.toml` in the
    /// working directory is read if it exists. File values take precedence over
    /// environment variables.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating
    /// it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("export.output_dir", ".")?
            .set_default("export.default_filename", DEFAULT_FILENAME)?
            .set_default("logging.level", "warn")?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(file)
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values the deserializer cannot check on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the default filename is empty or contains a
    /// path separator.
    pub fn validate(&self) -> CoreResult<()> {
        let name = self.export.default_filename.trim();
        if name.is_empty() {
            return Err(CoreError::ConfigError(
                "export.default_filename must not be empty".to_string(),
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(CoreError::ConfigError(format!(
                "export.default_filename must be a bare file name, got {name:?}"
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and the config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    if let Ok(env_file) = dotenvy::dotenv() {
        tracing::debug!(path = %env_file.display(), "Loaded .env file");
    }

    Settings::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(default_filename: &str) -> Settings {
        Settings {
            export: ExportConfig {
                output_dir: PathBuf::from("."),
                default_filename: default_filename.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    #[test_log::test]
    fn test_defaults_load() {
        tracing::debug!("Loading settings without a config file");

        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.export.default_filename, "identity.vcf");
        assert!(!settings.logging.level.is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/identicard.toml"))).is_err());
    }

    #[test]
    fn test_validate_accepts_bare_name() {
        assert!(settings("card.vcf").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(matches!(
            settings("  ").validate(),
            Err(CoreError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_path() {
        assert!(matches!(
            settings("../card.vcf").validate(),
            Err(CoreError::ConfigError(_))
        ));
    }
}
