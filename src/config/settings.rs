use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::logging::{LogFormat, LoggingConfig};

/// Настройки демонстрационного бинарника.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Начальное число бакетов демонстрационной таблицы
    pub demo_capacity: usize,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Settings {
    /// Загружает настройки: значения по умолчанию, затем переменные
    /// окружения `CHAINTABLE_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("CHAINTABLE"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("demo_capacity", 2)?
            .set_default("log_level", "info")?
            .set_default("log_format", "compact")?
            .add_source(env.try_parsing(true))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Проверяет согласованность значений.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo_capacity == 0 {
            return Err(ConfigError::Message(
                "demo_capacity must be at least 1".into(),
            ));
        }
        self.logging().validate().map_err(ConfigError::Message)
    }

    /// Конфигурация логирования, выведенная из настроек.
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            ..Default::default()
        }
    }
}
