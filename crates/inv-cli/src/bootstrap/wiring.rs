//! # Dependency Wiring
//!
//! Resolves configuration defaults and builds the concrete adapters behind the
//! ports. This is the only place that names infrastructure types.

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

use inv_app::AppDeps;
use inv_core::config::AppConfig;
use inv_core::item::status::SUGGESTED_STATUSES;
use inv_infra::fs::{default_data_file, logs_dir};
use inv_infra::vision::DEFAULT_TESSERACT_CMD;
use inv_infra::{CommandImageDescriber, CsvItemStore, SystemClock, TesseractCodeReader};

pub const DEFAULT_DESCRIBE_PROMPT: &str = "Describe the physical condition of the object in \
     this photo in one or two sentences, mentioning any visible damage, wear or missing parts.";

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for the daily log file; `None` disables file logging
    pub file_dir: Option<PathBuf>,
}

/// Configuration with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub logging: LoggingSettings,
    pub statuses: Vec<String>,
    pub describe_prompt: String,
    pub tesseract_cmd: String,
    pub describer_command: Vec<String>,
}

pub fn resolve_settings(config: AppConfig, overrides: Overrides) -> anyhow::Result<Settings> {
    let data_file = match overrides.data_file {
        Some(path) => path,
        None if !config.data_file.as_os_str().is_empty() => config.data_file,
        None => default_data_file().context("Failed to resolve default data file")?,
    };

    let file_dir = if !config.file_logging {
        None
    } else if config.log_dir.as_os_str().is_empty() {
        Some(logs_dir().context("Failed to resolve default log directory")?)
    } else {
        Some(config.log_dir)
    };

    let statuses = if config.statuses.is_empty() {
        SUGGESTED_STATUSES.iter().map(|s| s.to_string()).collect()
    } else {
        config.statuses
    };

    let describe_prompt = if config.describe_prompt.trim().is_empty() {
        DEFAULT_DESCRIBE_PROMPT.to_string()
    } else {
        config.describe_prompt
    };

    let tesseract_cmd = if config.tesseract_cmd.trim().is_empty() {
        DEFAULT_TESSERACT_CMD.to_string()
    } else {
        config.tesseract_cmd
    };

    Ok(Settings {
        data_file,
        logging: LoggingSettings { file_dir },
        statuses,
        describe_prompt,
        tesseract_cmd,
        describer_command: config.describer_command,
    })
}

pub fn wire_dependencies(settings: &Settings) -> AppDeps {
    AppDeps {
        item_store: Arc::new(CsvItemStore::new(settings.data_file.clone())),
        code_reader: Arc::new(TesseractCodeReader::new(settings.tesseract_cmd.clone())),
        image_describer: Arc::new(CommandImageDescriber::new(
            settings.describer_command.clone(),
        )),
        clock: Arc::new(SystemClock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let settings = resolve_settings(
            AppConfig::empty(),
            Overrides {
                data_file: Some(PathBuf::from("/tmp/items.csv")),
            },
        )
        .unwrap();

        assert_eq!(settings.statuses.len(), SUGGESTED_STATUSES.len());
        assert_eq!(settings.describe_prompt, DEFAULT_DESCRIBE_PROMPT);
        assert_eq!(settings.tesseract_cmd, "tesseract");
        assert!(settings.describer_command.is_empty());
        assert_eq!(settings.logging.file_dir, None);
    }

    #[test]
    fn test_command_line_data_file_wins_over_config() {
        let config = AppConfig {
            data_file: PathBuf::from("/srv/config.csv"),
            ..AppConfig::empty()
        };

        let settings = resolve_settings(
            config.clone(),
            Overrides {
                data_file: Some(PathBuf::from("/srv/flag.csv")),
            },
        )
        .unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/srv/flag.csv"));

        let settings = resolve_settings(config, Overrides::default()).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/srv/config.csv"));
    }

    #[test]
    fn test_configured_values_are_kept() {
        let config = AppConfig {
            data_file: PathBuf::from("/srv/items.csv"),
            log_dir: PathBuf::from("/var/log/inventory"),
            file_logging: true,
            statuses: vec!["ok".to_string(), "broken".to_string()],
            describe_prompt: "What is wrong with it?".to_string(),
            tesseract_cmd: "/opt/ocr/tesseract".to_string(),
            describer_command: vec!["describe".to_string()],
        };

        let settings = resolve_settings(config, Overrides::default()).unwrap();

        assert_eq!(settings.statuses, vec!["ok", "broken"]);
        assert_eq!(settings.describe_prompt, "What is wrong with it?");
        assert_eq!(settings.tesseract_cmd, "/opt/ocr/tesseract");
        assert_eq!(
            settings.logging.file_dir,
            Some(PathBuf::from("/var/log/inventory"))
        );
    }
}
