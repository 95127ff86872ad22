use crate::enums::MarketplaceType;
use serde::{Deserialize, Serialize};

/// Заголовки колонок файла загрузки в 1С.
/// Имена должны совпадать с шаблоном обработки 1С побайтно.
pub const COL_ACCOUNTING_SKU: &str = "Артикул";
pub const COL_SELLER_SKU: &str = "Артикул поставщика";
pub const COL_QUANTITY: &str = "Количество";
pub const COL_PRICE: &str = "Цена";
pub const COL_RETURN_COMMISSION: &str = "Комиссия за возвраты";
pub const COL_TOTAL: &str = "Сумма";

/// Итоговая строка по одному артикулу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuTotalsRow {
    /// Артикул в учётной системе (после маппинга)
    pub accounting_sku: String,
    /// Артикул продавца (как в отчёте маркетплейса)
    pub seller_sku: String,
    pub quantity: i64,
    /// Средняя цена за единицу (0 при нулевом количестве)
    pub average_price: f64,
    pub total: f64,
    /// Последняя комиссия за возвраты (только Ozon)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_commission: Option<f64>,
}

/// Таблица итогов по одной области агрегации (месяц или файл)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuTotalsTable {
    pub marketplace: MarketplaceType,
    /// Ключ области: "1-2020" для Яндекс Маркета, имя файла для Ozon
    pub scope: String,
    pub rows: Vec<SkuTotalsRow>,
}

impl SkuTotalsTable {
    /// Набор колонок выходного файла для маркетплейса
    pub fn columns(&self) -> Vec<&'static str> {
        columns_for(self.marketplace)
    }
}

/// Набор колонок выходного файла для маркетплейса
pub fn columns_for(marketplace: MarketplaceType) -> Vec<&'static str> {
    match marketplace {
        MarketplaceType::YandexMarket => vec![
            COL_ACCOUNTING_SKU,
            COL_SELLER_SKU,
            COL_QUANTITY,
            COL_PRICE,
            COL_TOTAL,
        ],
        MarketplaceType::Ozon => vec![
            COL_ACCOUNTING_SKU,
            COL_SELLER_SKU,
            COL_QUANTITY,
            COL_PRICE,
            COL_RETURN_COMMISSION,
            COL_TOTAL,
        ],
    }
}
