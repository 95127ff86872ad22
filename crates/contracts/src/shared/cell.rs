use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Значение ячейки таблицы (входной или выходной)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Integer value
    Integer(i64),
    /// Date value (без времени)
    Date(NaiveDate),
    /// Null value
    Null,
}

impl CellValue {
    /// Пустая ячейка: Null или строка из одних пробелов
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Текстовое представление ячейки.
    ///
    /// Целые числа, сохранённые Excel как float, выводятся без дробной части,
    /// чтобы артикулы и номера заказов не превращались в "12345.0".
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Integer(i) => i.to_string(),
            CellValue::Date(d) => d.format("%d.%m.%Y").to_string(),
            CellValue::Null => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}
