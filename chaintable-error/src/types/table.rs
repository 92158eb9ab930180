use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки хеш-таблицы.
///
/// Отсутствие ключа ошибкой не является: `retrieve` возвращает `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Ёмкость таблицы должна быть положительной.
    #[error("Invalid capacity {capacity}: table needs at least one bucket")]
    InvalidCapacity { capacity: usize },

    /// Удвоение ёмкости не помещается в `usize`.
    #[error("Capacity overflow: cannot double {capacity} buckets")]
    CapacityOverflow { capacity: usize },

    /// Не удалось выделить память.
    #[error("Allocation failed for {what}: {requested} requested")]
    AllocationFailed {
        what: &'static str,
        requested: usize,
    },
}

impl ErrorExt for TableError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCapacity { .. } => StatusCode::InvalidArgs,
            Self::CapacityOverflow { .. } => StatusCode::InvalidArgs,
            Self::AllocationFailed { .. } => StatusCode::OutOfMemory,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
