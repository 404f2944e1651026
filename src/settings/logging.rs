use serde::{Deserialize, Deserializer};
use tracing::Level;
use super::{parse_env_var, SettingsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: Level,
}

impl LogSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let level: String = parse_env_var("HELMET_LOG_LEVEL", || "info".to_string())?;
        Ok(Self {
            format: parse_env_var("HELMET_LOG_FORMAT", LogFormat::default)?,
            level: parse_log_level(&level).ok_or_else(|| SettingsError::EnvVarInvalid {
                var_name: "HELMET_LOG_LEVEL".to_string(),
                value: level.clone(),
                reason: "유효하지 않은 로그 레벨".to_string(),
            })?,
        })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: Level::INFO,
        }
    }
}

fn parse_log_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for LogSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            #[serde(default)]
            format: LogFormat,
            #[serde(default = "default_log_level_string")]
            level: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        Ok(LogSettings {
            format: helper.format,
            level: parse_log_level(&helper.level).unwrap_or(Level::INFO),
        })
    }
}

fn default_log_level_string() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_settings_from_toml() {
        let settings: LogSettings = toml::from_str(r#"
            format = "json"
            level = "debug"
        "#).unwrap();

        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.level, Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_in_toml_falls_back_to_info() {
        let settings: LogSettings = toml::from_str(r#"level = "loud""#).unwrap();
        assert_eq!(settings.level, Level::INFO);
        assert_eq!(settings.format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_invalid_level_from_env() {
        std::env::set_var("HELMET_LOG_LEVEL", "loud");
        let result = LogSettings::from_env();
        std::env::remove_var("HELMET_LOG_LEVEL");

        assert!(matches!(result, Err(SettingsError::EnvVarInvalid { .. })));
    }
}
