use serde::{Deserialize, Serialize};

/// Уровни, которые принимает `LoggingConfig::level`.
const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Формат вывода событий.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Уровень для событий крейта (`trace`..`error`, `off`)
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// ANSI-цвета в консоли
    #[serde(default = "default_true")]
    pub with_ansi: bool,
    /// Выводить target события
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl LoggingConfig {
    /// Проверяет, что уровень распознаётся.
    pub fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(format!(
                "unknown log level '{}', expected one of {LEVELS:?}",
                self.level
            ))
        }
    }

    /// Директива `EnvFilter`: уровень из конфига для крейта, `warn` для
    /// остальных.
    pub fn build_filter_directive(&self) -> String {
        format!("warn,chaintable={}", self.level.to_ascii_lowercase())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: true,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
