use crate::shared::error::ConvertError;
use crate::shared::excel::{column_key, RawRow};
use contracts::domain::a102_ozon_realization_row::OzonRealizationRow;

// Колонки отчёта о реализации Ozon (двухуровневый заголовок)
pub const COL_LINE_NUMBER: &str = "№ п/п";
pub const COL_SKU: &str = "Код товара продавца";
pub const CAT_SOLD: &str = "Реализовано";
pub const CAT_RETURNED: &str = "Возвращено клиентом";
pub const FIELD_QTY: &str = "Кол-во";
pub const FIELD_PRICE: &str = "Цена";
pub const FIELD_SUM: &str = "Сумма, руб.";
pub const FIELD_COMMISSION: &str = "Ком-я, руб.";

/// Строка с товаром, а не итог или подвал отчёта: у неё заполнен номер п/п
pub fn is_report_line(row: &RawRow) -> Result<bool, ConvertError> {
    Ok(!row.is_blank(COL_LINE_NUMBER)?)
}

pub fn normalize(row: &RawRow) -> Result<OzonRealizationRow, ConvertError> {
    let sold = |field: &str| column_key(CAT_SOLD, field);
    let returned = |field: &str| column_key(CAT_RETURNED, field);

    Ok(OzonRealizationRow {
        source_line: row.line,
        sku: row.text(COL_SKU)?,
        sold_qty: row.integer_or(&sold(FIELD_QTY), 0)?,
        sold_price: row.amount(&sold(FIELD_PRICE))?,
        sold_amount: row.amount(&sold(FIELD_SUM))?,
        sold_commission: row.amount(&sold(FIELD_COMMISSION))?,
        returned_qty: row.integer_or(&returned(FIELD_QTY), 0)?,
        returned_price: row.amount(&returned(FIELD_PRICE))?,
        returned_amount: row.amount(&returned(FIELD_SUM))?,
        return_commission: row.amount(&returned(FIELD_COMMISSION))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::CellValue;

    fn row(line_number: CellValue) -> RawRow {
        let mut row = RawRow {
            line: 14,
            ..Default::default()
        };
        row.values.insert(COL_LINE_NUMBER.into(), line_number);
        row.values.insert(COL_SKU.into(), CellValue::Number(100234.0));
        for cat in [CAT_SOLD, CAT_RETURNED] {
            for field in [FIELD_QTY, FIELD_PRICE, FIELD_SUM, FIELD_COMMISSION] {
                row.values.insert(column_key(cat, field), CellValue::Null);
            }
        }
        row.values
            .insert(column_key(CAT_SOLD, FIELD_QTY), CellValue::Number(3.0));
        row.values
            .insert(column_key(CAT_SOLD, FIELD_SUM), CellValue::Number(300.0));
        row.values
            .insert(column_key(CAT_SOLD, FIELD_COMMISSION), CellValue::Number(10.0));
        row
    }

    #[test]
    fn test_normalize_blank_return_block() {
        let r = normalize(&row(CellValue::Integer(1))).unwrap();
        assert_eq!(r.sku, "100234");
        assert_eq!(r.sold_qty, 3);
        assert_eq!(r.sold_amount, 300.0);
        assert_eq!(r.sold_commission, 10.0);
        assert_eq!(r.returned_qty, 0);
        assert_eq!(r.return_commission, 0.0);
    }

    #[test]
    fn test_report_line_detection() {
        assert!(is_report_line(&row(CellValue::Integer(1))).unwrap());
        assert!(!is_report_line(&row(CellValue::Null)).unwrap());
    }

    #[test]
    fn test_missing_category_column_fails() {
        let mut r = row(CellValue::Integer(1));
        r.values.remove(&column_key(CAT_RETURNED, FIELD_COMMISSION));
        assert!(matches!(
            normalize(&r),
            Err(ConvertError::FieldMissing { .. })
        ));
    }
}
