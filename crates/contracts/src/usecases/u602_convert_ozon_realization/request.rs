use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Запрос на конвертацию одного отчёта о реализации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub input_path: PathBuf,
    /// Каталог для файла загрузки; имя = "1C-" + имя исходного файла
    pub output_dir: PathBuf,
}

/// Запрос на пакетную конвертацию всех отчётов в каталоге
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConvertRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}
