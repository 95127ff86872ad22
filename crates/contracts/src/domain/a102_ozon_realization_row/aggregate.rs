use crate::domain::common::SkuKeyed;
use serde::{Deserialize, Serialize};

/// Строка отчёта о реализации Ozon.
///
/// Одна строка содержит и продажу (блок "Реализовано"), и возврат
/// (блок "Возвращено клиентом") по одному артикулу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OzonRealizationRow {
    /// Номер строки в исходном файле (1-based, как в Excel)
    pub source_line: usize,
    /// Код товара продавца
    pub sku: String,

    // Реализовано
    pub sold_qty: i64,
    pub sold_price: f64,
    pub sold_amount: f64,
    pub sold_commission: f64,

    // Возвращено клиентом
    pub returned_qty: i64,
    pub returned_price: f64,
    pub returned_amount: f64,
    pub return_commission: f64,
}

impl OzonRealizationRow {
    /// Чистое изменение количества: продано минус возвращено
    pub fn net_quantity(&self) -> i64 {
        self.sold_qty - self.returned_qty
    }

    /// Чистое изменение суммы: выручка без комиссии минус возврат с комиссией
    pub fn net_amount(&self) -> f64 {
        self.sold_amount - self.sold_commission - self.returned_amount + self.return_commission
    }

    /// Строка без движения товара (ни продаж, ни возвратов)
    pub fn is_empty_movement(&self) -> bool {
        self.sold_qty == 0 && self.returned_qty == 0
    }
}

impl SkuKeyed for OzonRealizationRow {
    fn sku(&self) -> &str {
        &self.sku
    }

    fn source_line(&self) -> usize {
        self.source_line
    }
}
