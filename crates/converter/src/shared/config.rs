use crate::projections::p950_sku_totals::UndatedPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    #[serde(default)]
    pub ym: YmConfig,
    #[serde(default)]
    pub ozon: OzonConfig,
    /// Каталог, относительно которого разрешаются относительные пути.
    /// None - встроенная конфигурация, пути от текущего каталога.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Таблица соответствия артикулов (артикул -> ASKU)
    pub mapping: String,
    pub ym_input: String,
    pub ym_output_dir: String,
    pub ozon_input: String,
    pub ozon_batch_dir: String,
    pub ozon_output_dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct YmConfig {
    /// Что делать со строками без даты платёжного поручения
    #[serde(default)]
    pub undated_policy: UndatedPolicy,
    /// Количество для пустой ячейки "Количество"
    #[serde(default)]
    pub default_quantity: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OzonConfig {
    /// Строк шапки отчёта перед двухуровневым заголовком таблицы
    #[serde(default = "default_ozon_skip_rows")]
    pub skip_rows: usize,
}

impl Default for OzonConfig {
    fn default() -> Self {
        Self {
            skip_rows: default_ozon_skip_rows(),
        }
    }
}

fn default_ozon_skip_rows() -> usize {
    11
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[paths]
mapping = "data/sku-mapping-table.xlsx"
ym_input = "data/payments_01-10-2019_31-12-2019.xlsx"
ym_output_dir = "output"
ozon_input = "data/ozon/декабрь 2019.xlsx"
ozon_batch_dir = "data/ozon"
ozon_output_dir = "output/ozon"

[ym]
undated_policy = "drop"
default_quantity = 0

[ozon]
skip_rows = 11
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit path (--config), must exist
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from: {}", path.display());
        return load_from_file(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_from_file(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

impl Config {
    /// Resolves a configured path.
    ///
    /// Absolute paths are used as is. A relative path is taken from the config
    /// directory only when it exists there, otherwise from the working directory.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match &self.base_dir {
            Some(dir) if dir.join(path).exists() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
