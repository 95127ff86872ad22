use crate::domain::common::SkuKeyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тип транзакции в отчёте по платежам Яндекс Маркета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YmTransactionKind {
    /// "Начисление" - продажа признана
    Charge,
    /// "Возврат" - ранее признанная продажа отменена
    Return,
    /// Любой другой тип (удержания, компенсации и т.п.)
    Unknown,
}

impl YmTransactionKind {
    /// Разбор значения колонки "Тип транзакции"
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Начисление" => YmTransactionKind::Charge,
            "Возврат" => YmTransactionKind::Return,
            _ => YmTransactionKind::Unknown,
        }
    }
}

/// Строка отчёта по платежам Яндекс Маркета
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YmPaymentTransaction {
    /// Номер строки в исходном файле (1-based, как в Excel)
    pub source_line: usize,
    /// Дата транзакции (как в файле)
    pub transaction_date: String,
    /// ID транзакции
    pub transaction_id: String,
    /// Номер заказа - ключ дедупликации количества
    pub order_number: String,
    /// Дата оформления заказа (как в файле)
    pub order_date: String,
    /// Ваш SKU
    pub sku: String,
    /// Название товара
    pub sku_name: String,
    /// Количество (0, если ячейка пустая)
    pub quantity: i64,
    /// Сумма транзакции, руб. (возвраты приходят со знаком минус)
    pub amount: f64,
    pub kind: YmTransactionKind,
    /// Источник транзакции
    pub source: String,
    /// Дата платёжного поручения; None - поручения ещё нет
    pub payment_date: Option<NaiveDate>,
    pub payment_number: String,
    pub payment_sum: Option<f64>,
}

impl SkuKeyed for YmPaymentTransaction {
    fn sku(&self) -> &str {
        &self.sku
    }

    fn source_line(&self) -> usize {
        self.source_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(YmTransactionKind::from_label("Начисление"), YmTransactionKind::Charge);
        assert_eq!(YmTransactionKind::from_label(" Возврат "), YmTransactionKind::Return);
        assert_eq!(
            YmTransactionKind::from_label("Удержание"),
            YmTransactionKind::Unknown
        );
    }
}
