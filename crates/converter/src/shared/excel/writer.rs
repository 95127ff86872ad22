use crate::shared::error::ConvertError;
use contracts::shared::CellValue;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Готовая к записи таблица: строка заголовков + строки данных
#[derive(Debug, Clone, Default)]
pub struct ExportTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Записывает таблицу на единственный лист нового xlsx-файла.
/// Каталог назначения создаётся при необходимости, существующий файл перезаписывается.
pub fn write_table(path: &Path, table: &ExportTable) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConvertError::workbook(path, e))?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(|e| ConvertError::workbook(path, e))?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            let written = match value {
                CellValue::Text(s) => worksheet.write_string(row_num, col, s).map(|_| ()),
                CellValue::Number(n) => worksheet.write_number(row_num, col, *n).map(|_| ()),
                CellValue::Integer(i) => {
                    worksheet.write_number(row_num, col, *i as f64).map(|_| ())
                }
                CellValue::Date(d) => worksheet
                    .write_string(row_num, col, d.format("%d.%m.%Y").to_string())
                    .map(|_| ()),
                CellValue::Null => Ok(()),
            };
            written.map_err(|e| ConvertError::workbook(path, e))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ConvertError::workbook(path, e))?;

    tracing::debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
