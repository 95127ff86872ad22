use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Записанный файл загрузки в 1С
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrittenFile {
    /// Область агрегации (месяц "1-2020" или имя исходного файла)
    pub scope: String,
    pub path: PathBuf,
    /// Количество строк-артикулов в файле
    pub sku_count: usize,
}
