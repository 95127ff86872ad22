use std::path::PathBuf;
use thiserror::Error;

/// Ошибки конвертации выгрузок маркетплейсов
#[derive(Debug, Error)]
pub enum ConvertError {
    /// В файле нет обязательной колонки
    #[error("Column '{column}' not found (row {line})")]
    FieldMissing { column: String, line: usize },

    /// Транзакция попала не в тот накопитель: ошибка маршрутизации, итоги не пишем
    #[error("Transaction for SKU '{transaction_sku}' routed to aggregate of SKU '{aggregate_sku}' (row {line})")]
    RoutingMismatch {
        aggregate_sku: String,
        transaction_sku: String,
        line: usize,
    },

    /// Значение ячейки не разбирается (дата, число)
    #[error("Invalid value '{value}' in column '{column}' (row {line})")]
    InvalidValue {
        column: String,
        line: usize,
        value: String,
    },

    /// Транзакция без даты платёжного поручения при политике reject
    #[error("Order '{order}' has no payment date (row {line})")]
    UndatedTransaction { order: String, line: usize },

    #[error("Failed to read {}: {message}", .path.display())]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    Workbook { path: PathBuf, message: String },
}

impl ConvertError {
    pub fn file_read(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        ConvertError::FileRead {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn workbook(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        ConvertError::Workbook {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
