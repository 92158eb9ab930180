pub mod table;

// Публичный экспорт всех типов ошибок из вложенных модулей.
pub use table::*;
