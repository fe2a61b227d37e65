use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Item table location (path info only, no existence check)
    pub data_file: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// Whether logs are also written to `log_dir`
    pub file_logging: bool,

    /// Situation labels offered by forms (may be empty)
    pub statuses: Vec<String>,

    /// Prompt sent with a photo when drafting an inspection comment
    pub describe_prompt: String,

    /// Path or name of the tesseract executable
    pub tesseract_cmd: String,

    /// Program and leading arguments of the image-description command
    pub describer_command: Vec<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Missing sections and keys map to empty values; wrong types are treated as missing.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let list_at = |section: &str, key: &str| -> Vec<String> {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_array())
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default()
        };

        Ok(Self {
            data_file: PathBuf::from(str_at("storage", "data_file")),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            statuses: list_at("inspection", "statuses"),
            describe_prompt: str_at("inspection", "describe_prompt"),
            tesseract_cmd: str_at("ocr", "tesseract_cmd"),
            describer_command: list_at("describer", "command"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self::default()
    }
}
