use crate::usecases::common::{UseCaseError, WrittenFile};
use serde::{Deserialize, Serialize};

/// Итог конвертации одного отчёта о реализации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub input_file: String,
    pub rows_read: usize,
    /// Строки без номера п/п (итоги, подвал) и строки без движения товара
    pub rows_skipped: usize,
    pub rows_aggregated: usize,
    pub output: WrittenFile,
}

/// Файл, пропущенный при пакетной конвертации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    pub input_file: String,
    pub error: UseCaseError,
}

/// Итог пакетной конвертации
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConvertResponse {
    pub converted: Vec<ConvertResponse>,
    pub failed: Vec<FailedFile>,
}
