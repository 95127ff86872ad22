use super::RawRow;
use crate::shared::error::ConvertError;
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use chrono::NaiveDate;
use contracts::shared::CellValue;
use std::collections::HashMap;
use std::path::Path;

/// Сколько строк занимает заголовок таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRows {
    /// Одна строка с именами колонок
    Single,
    /// Категория (объединённые ячейки) + подполе
    Double,
}

/// Расположение таблицы на первом листе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Строк перед заголовком (шапка отчёта)
    pub skip_rows: usize,
    pub header: HeaderRows,
}

impl TableLayout {
    pub fn single_header() -> Self {
        Self {
            skip_rows: 0,
            header: HeaderRows::Single,
        }
    }

    pub fn double_header(skip_rows: usize) -> Self {
        Self {
            skip_rows,
            header: HeaderRows::Double,
        }
    }
}

/// Ключ колонки двухуровневого заголовка: "Реализовано / Кол-во"
pub fn column_key(category: &str, field: &str) -> String {
    format!("{} / {}", category, field)
}

/// Читает первый лист файла и возвращает строки данных.
///
/// Полностью пустые строки пропускаются. Колонки без заголовка не попадают в строки.
pub fn read_table(path: &Path, layout: &TableLayout) -> Result<Vec<RawRow>, ConvertError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let grid = if is_csv {
        read_csv_grid(path, layout.skip_rows)?
    } else {
        read_workbook_grid(path)?
    };

    rows_from_grid(path, grid, layout)
}

/// Ячейки первого листа, начиная с первой строки файла
fn read_workbook_grid(path: &Path) -> Result<Vec<Vec<CellValue>>, ConvertError> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| ConvertError::file_read(path, e))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        return Err(ConvertError::file_read(path, "workbook contains no sheets"));
    };

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| ConvertError::file_read(path, format!("sheet '{}': {}", first_sheet, e)))?;

    // calamine range starts at the first used cell, not at A1
    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; start_col];
        cells.extend(row.iter().map(cell_from_data));
        grid.push(cells);
    }

    tracing::debug!(
        "Read {} rows from sheet '{}' of {}",
        grid.len(),
        first_sheet,
        path.display()
    );

    Ok(grid)
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Integer(*n),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => serial_to_date(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Excel serial date (1900 system) to calendar date, time part dropped
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(chrono::Duration::days(serial.floor() as i64))
}

fn read_csv_grid(path: &Path, header_row: usize) -> Result<Vec<Vec<CellValue>>, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::file_read(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| ConvertError::file_read(path, e))?;

    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');
    // Report title lines above the table carry no separators
    let delimiter = detect_delimiter(text.lines().nth(header_row).unwrap_or_default());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ConvertError::file_read(path, e))?;
        grid.push(
            record
                .iter()
                .map(|v| {
                    if v.trim().is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::Text(v.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(grid)
}

/// Отчёты из русской локали Excel приходят с ';', при равенстве выбираем его
fn detect_delimiter(header_line: &str) -> u8 {
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    if semicolons >= commas {
        b';'
    } else {
        b','
    }
}

fn header_keys(layout: &TableLayout, header: &[Vec<CellValue>]) -> Vec<Option<String>> {
    let width = header.iter().map(Vec::len).max().unwrap_or(0);
    let text_at = |row: &Vec<CellValue>, col: usize| {
        row.get(col).map(CellValue::to_text).unwrap_or_default()
    };

    match layout.header {
        HeaderRows::Single => (0..width)
            .map(|col| {
                let name = text_at(&header[0], col);
                (!name.is_empty()).then_some(name)
            })
            .collect(),
        HeaderRows::Double => {
            // Merged category cells carry the value only in the first column
            let mut category = String::new();
            (0..width)
                .map(|col| {
                    let top = text_at(&header[0], col);
                    let field = text_at(&header[1], col);
                    if !top.is_empty() {
                        category = top.clone();
                    }
                    if field.is_empty() {
                        (!top.is_empty()).then_some(top)
                    } else if category.is_empty() {
                        Some(field)
                    } else {
                        Some(column_key(&category, &field))
                    }
                })
                .collect()
        }
    }
}

fn rows_from_grid(
    path: &Path,
    grid: Vec<Vec<CellValue>>,
    layout: &TableLayout,
) -> Result<Vec<RawRow>, ConvertError> {
    let header_len = match layout.header {
        HeaderRows::Single => 1,
        HeaderRows::Double => 2,
    };
    let data_start = layout.skip_rows + header_len;

    if grid.len() < data_start {
        return Err(ConvertError::file_read(
            path,
            format!(
                "expected header at row {}, file has {} rows",
                layout.skip_rows + 1,
                grid.len()
            ),
        ));
    }

    let keys = header_keys(layout, &grid[layout.skip_rows..data_start]);

    let mut rows = Vec::new();
    for (offset, cells) in grid.into_iter().enumerate().skip(data_start) {
        if cells.iter().all(CellValue::is_blank) {
            continue;
        }

        let mut values: HashMap<String, CellValue> = HashMap::new();
        for (col, key) in keys.iter().enumerate() {
            let Some(key) = key else { continue };
            let value = cells.get(col).cloned().unwrap_or(CellValue::Null);
            // Duplicate header names: first column wins
            values.entry(key.clone()).or_insert(value);
        }
        rows.push(RawRow::new(offset + 1, values));
    }

    Ok(rows)
}
