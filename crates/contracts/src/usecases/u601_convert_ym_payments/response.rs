use crate::usecases::common::WrittenFile;
use serde::{Deserialize, Serialize};

/// Итог конвертации отчёта по платежам
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub input_file: String,
    /// Прочитано строк данных
    pub rows_read: usize,
    /// Учтено в итогах
    pub rows_aggregated: usize,
    /// Отброшено строк без даты платёжного поручения
    pub rows_undated: usize,
    /// По одному файлу на месяц, в порядке первого появления месяца в отчёте
    pub files: Vec<WrittenFile>,
}
