use crate::shared::error::ConvertError;
use chrono::NaiveDate;
use contracts::shared::CellValue;
use std::collections::HashMap;

/// Строка исходной таблицы: значения по имени колонки
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    /// Номер строки в файле (1-based, как в Excel)
    pub line: usize,
    /// Column values by column key
    pub values: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new(line: usize, values: HashMap<String, CellValue>) -> Self {
        Self { line, values }
    }

    /// Ячейка обязательной колонки; отсутствие колонки - FieldMissing
    pub fn cell(&self, column: &str) -> Result<&CellValue, ConvertError> {
        self.values
            .get(column)
            .ok_or_else(|| ConvertError::FieldMissing {
                column: column.to_string(),
                line: self.line,
            })
    }

    pub fn is_blank(&self, column: &str) -> Result<bool, ConvertError> {
        Ok(self.cell(column)?.is_blank())
    }

    /// Текст ячейки; пустая ячейка - пустая строка
    pub fn text(&self, column: &str) -> Result<String, ConvertError> {
        Ok(self.cell(column)?.to_text())
    }

    /// Целое число; пустая ячейка - `default`
    pub fn integer_or(&self, column: &str, default: i64) -> Result<i64, ConvertError> {
        let cell = self.cell(column)?;
        let number = match cell {
            CellValue::Null => return Ok(default),
            CellValue::Integer(i) => return Ok(*i),
            CellValue::Number(n) => *n,
            CellValue::Text(s) if s.trim().is_empty() => return Ok(default),
            CellValue::Text(s) => parse_decimal(s).ok_or_else(|| self.invalid(column, cell))?,
            CellValue::Date(_) => return Err(self.invalid(column, cell)),
        };
        if number.fract() != 0.0 || !number.is_finite() {
            return Err(self.invalid(column, cell));
        }
        Ok(number as i64)
    }

    /// Денежная сумма; пустая ячейка - 0
    pub fn amount(&self, column: &str) -> Result<f64, ConvertError> {
        Ok(self.optional_amount(column)?.unwrap_or(0.0))
    }

    pub fn optional_amount(&self, column: &str) -> Result<Option<f64>, ConvertError> {
        let cell = self.cell(column)?;
        match cell {
            CellValue::Null => Ok(None),
            CellValue::Integer(i) => Ok(Some(*i as f64)),
            CellValue::Number(n) => Ok(Some(*n)),
            CellValue::Text(s) if s.trim().is_empty() => Ok(None),
            CellValue::Text(s) => parse_decimal(s)
                .map(Some)
                .ok_or_else(|| self.invalid(column, cell)),
            CellValue::Date(_) => Err(self.invalid(column, cell)),
        }
    }

    /// Дата в формате ДД.ММ.ГГГГ (допускается хвост со временем).
    /// Пустая ячейка - None, это не ошибка.
    pub fn optional_date(&self, column: &str) -> Result<Option<NaiveDate>, ConvertError> {
        let cell = self.cell(column)?;
        match cell {
            CellValue::Null => Ok(None),
            CellValue::Date(d) => Ok(Some(*d)),
            CellValue::Text(s) => {
                let Some(day_part) = s.split_whitespace().next() else {
                    return Ok(None);
                };
                NaiveDate::parse_from_str(day_part, "%d.%m.%Y")
                    .map(Some)
                    .map_err(|_| self.invalid(column, cell))
            }
            CellValue::Number(n) => super::reader::serial_to_date(*n)
                .map(Some)
                .ok_or_else(|| self.invalid(column, cell)),
            CellValue::Integer(i) => super::reader::serial_to_date(*i as f64)
                .map(Some)
                .ok_or_else(|| self.invalid(column, cell)),
        }
    }

    fn invalid(&self, column: &str, cell: &CellValue) -> ConvertError {
        ConvertError::InvalidValue {
            column: column.to_string(),
            line: self.line,
            value: cell.to_text(),
        }
    }
}

/// Parse decimal number that may use comma as decimal separator and spaces as thousand separators
pub fn parse_decimal(s: &str) -> Option<f64> {
    let normalized: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: Vec<(&str, CellValue)>) -> RawRow {
        RawRow::new(
            5,
            values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_missing_column_is_field_missing() {
        let r = row(vec![("a", CellValue::Null)]);
        match r.text("b") {
            Err(ConvertError::FieldMissing { column, line }) => {
                assert_eq!(column, "b");
                assert_eq!(line, 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_integer_defaults_and_parsing() {
        let r = row(vec![
            ("blank", CellValue::Null),
            ("float", CellValue::Number(3.0)),
            ("text", CellValue::Text(" 4 ".into())),
            ("fraction", CellValue::Number(1.5)),
        ]);
        assert_eq!(r.integer_or("blank", 0).unwrap(), 0);
        assert_eq!(r.integer_or("blank", 7).unwrap(), 7);
        assert_eq!(r.integer_or("float", 0).unwrap(), 3);
        assert_eq!(r.integer_or("text", 0).unwrap(), 4);
        assert!(matches!(
            r.integer_or("fraction", 0),
            Err(ConvertError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_amount_parses_russian_format() {
        let r = row(vec![
            ("sum", CellValue::Text("1 234,50".into())),
            ("blank", CellValue::Null),
            ("neg", CellValue::Number(-100.0)),
        ]);
        assert_eq!(r.amount("sum").unwrap(), 1234.5);
        assert_eq!(r.amount("blank").unwrap(), 0.0);
        assert_eq!(r.optional_amount("blank").unwrap(), None);
        assert_eq!(r.amount("neg").unwrap(), -100.0);
    }

    #[test]
    fn test_optional_date() {
        let r = row(vec![
            ("text", CellValue::Text("15.01.2020".into())),
            ("with_time", CellValue::Text("20.01.2020 00:00:00".into())),
            ("empty", CellValue::Text(String::new())),
            ("null", CellValue::Null),
            ("iso", CellValue::Text("2020-01-15".into())),
        ]);
        let jan15 = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(r.optional_date("text").unwrap(), Some(jan15));
        assert_eq!(
            r.optional_date("with_time").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 20)
        );
        assert_eq!(r.optional_date("empty").unwrap(), None);
        assert_eq!(r.optional_date("null").unwrap(), None);
        assert!(matches!(
            r.optional_date("iso"),
            Err(ConvertError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("5309,00"), Some(5309.0));
        assert_eq!(parse_decimal("-12.5"), Some(-12.5));
        assert_eq!(parse_decimal("abc"), None);
    }
}
