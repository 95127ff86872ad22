use crate::shared::error::ConvertError;
use crate::shared::excel::{read_table, TableLayout};
use std::collections::HashMap;
use std::path::Path;

/// Колонка артикула продавца в таблице соответствия
pub const COL_SELLER_SKU: &str = "артикул";
/// Колонка артикула учётной системы
pub const COL_ACCOUNTING_SKU: &str = "ASKU";

/// Таблица соответствия артикулов продавца артикулам 1С.
///
/// Загружается один раз до начала агрегации и дальше только читается.
#[derive(Debug, Clone, Default)]
pub struct SkuMapping {
    map: HashMap<String, String>,
}

impl SkuMapping {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Загрузка из первого листа xlsx (колонки "артикул" и "ASKU")
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let rows = read_table(path, &TableLayout::single_header())?;

        let mut map = HashMap::new();
        let mut skipped = 0usize;
        let mut blank_targets = 0usize;
        for row in &rows {
            let seller_sku = row.text(COL_SELLER_SKU)?;
            let accounting_sku = row.text(COL_ACCOUNTING_SKU)?;
            if seller_sku.is_empty() {
                skipped += 1;
                continue;
            }
            if accounting_sku.is_empty() {
                tracing::warn!(
                    "SKU mapping: seller SKU '{}' at row {} has empty ASKU",
                    seller_sku,
                    row.line
                );
                blank_targets += 1;
            }
            if let Some(previous) = map.insert(seller_sku.clone(), accounting_sku) {
                tracing::warn!(
                    "SKU mapping: duplicate seller SKU '{}' at row {}, replacing '{}'",
                    seller_sku,
                    row.line,
                    previous
                );
            }
        }

        tracing::info!(
            "Loaded SKU mapping from {}: {} entries ({} with empty ASKU), {} rows without seller SKU",
            path.display(),
            map.len(),
            blank_targets,
            skipped
        );

        Ok(Self { map })
    }

    /// Артикул 1С для артикула продавца; без соответствия - сам артикул продавца
    pub fn resolve<'a>(&'a self, sku: &'a str) -> &'a str {
        self.map.get(sku).map(String::as_str).unwrap_or(sku)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
