use crate::shared::error::ConvertError;
use crate::shared::excel::RawRow;
use contracts::domain::a101_ym_payment_transaction::{YmPaymentTransaction, YmTransactionKind};

// Колонки отчёта по платежам Яндекс Маркета (как в выгрузке ЛК)
pub const COL_TRANSACTION_DATE: &str = "Дата транзакции";
pub const COL_TRANSACTION_ID: &str = "ID транзакции";
pub const COL_ORDER_NUMBER: &str = "Номер заказа";
pub const COL_ORDER_DATE: &str = "Дата оформления";
pub const COL_SKU: &str = "Ваш SKU";
pub const COL_SKU_NAME: &str = "Название товара";
pub const COL_QUANTITY: &str = "Количество";
pub const COL_AMOUNT: &str = "Сумма транзакции, руб.";
pub const COL_TRANSACTION_TYPE: &str = "Тип транзакции";
pub const COL_TRANSACTION_SOURCE: &str = "Источник транзакции";
pub const COL_PAYMENT_DATE: &str = "Дата платёжного поручения";
pub const COL_PAYMENT_NUMBER: &str = "Номер платёжного поручения";
pub const COL_PAYMENT_SUM: &str = "Сумма платёжного поручения";

#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Количество для пустой ячейки
    pub default_quantity: i64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_quantity: 0,
        }
    }
}

/// Строка отчёта -> транзакция.
/// Любая отсутствующая колонка - FieldMissing, пустая дата платежа - None.
pub fn normalize(
    row: &RawRow,
    options: &NormalizeOptions,
) -> Result<YmPaymentTransaction, ConvertError> {
    Ok(YmPaymentTransaction {
        source_line: row.line,
        transaction_date: row.text(COL_TRANSACTION_DATE)?,
        transaction_id: row.text(COL_TRANSACTION_ID)?,
        order_number: row.text(COL_ORDER_NUMBER)?,
        order_date: row.text(COL_ORDER_DATE)?,
        sku: row.text(COL_SKU)?,
        sku_name: row.text(COL_SKU_NAME)?,
        quantity: row.integer_or(COL_QUANTITY, options.default_quantity)?,
        amount: row.amount(COL_AMOUNT)?,
        kind: YmTransactionKind::from_label(&row.text(COL_TRANSACTION_TYPE)?),
        source: row.text(COL_TRANSACTION_SOURCE)?,
        payment_date: row.optional_date(COL_PAYMENT_DATE)?,
        payment_number: row.text(COL_PAYMENT_NUMBER)?,
        payment_sum: row.optional_amount(COL_PAYMENT_SUM)?,
    })
}

/// Все колонки, которые читает нормализатор (для сборки тестовых файлов)
pub const ALL_COLUMNS: [&str; 13] = [
    COL_TRANSACTION_DATE,
    COL_TRANSACTION_ID,
    COL_ORDER_NUMBER,
    COL_ORDER_DATE,
    COL_SKU,
    COL_SKU_NAME,
    COL_QUANTITY,
    COL_AMOUNT,
    COL_TRANSACTION_TYPE,
    COL_TRANSACTION_SOURCE,
    COL_PAYMENT_DATE,
    COL_PAYMENT_NUMBER,
    COL_PAYMENT_SUM,
];
