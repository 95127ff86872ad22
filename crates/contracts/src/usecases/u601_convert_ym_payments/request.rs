use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Запрос на конвертацию отчёта по платежам Яндекс Маркета
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Файл отчёта (.xlsx или .csv)
    pub input_path: PathBuf,
    /// Каталог для файлов загрузки; имя файла = ключ месяца ("1-2020.xlsx")
    pub output_dir: PathBuf,
}
