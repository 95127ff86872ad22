use super::batch::discover_reports;
use crate::domain::a102_ozon_realization_row::{is_report_line, normalize};
use crate::projections::p950_sku_totals::{ozon_totals, to_export_table, OzonSkuAggregate, SkuAggregator};
use crate::shared::config::OzonConfig;
use crate::shared::error::ConvertError;
use crate::shared::excel::{read_table, write_table, TableLayout};
use crate::shared::sku_mapping::SkuMapping;
use anyhow::{Context, Result};
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, WrittenFile};
use contracts::usecases::u602_convert_ozon_realization::{
    BatchConvertRequest, BatchConvertResponse, ConvertOzonRealization, ConvertRequest,
    ConvertResponse, FailedFile,
};
use std::path::Path;

/// Executor для UseCase конвертации отчёта о реализации Ozon
pub struct ConvertExecutor {
    mapping: SkuMapping,
    layout: TableLayout,
}

impl ConvertExecutor {
    pub fn new(mapping: SkuMapping, config: &OzonConfig) -> Self {
        Self {
            mapping,
            layout: TableLayout::double_header(config.skip_rows),
        }
    }

    /// Конвертировать один отчёт: итоги по артикулам за весь файл
    pub fn execute(&self, request: &ConvertRequest) -> Result<ConvertResponse> {
        let input = &request.input_path;
        tracing::info!(
            "{} ({}): converting {}",
            ConvertOzonRealization::display_name(),
            ConvertOzonRealization::full_name(),
            input.display()
        );

        let rows = read_table(input, &self.layout)
            .with_context(|| format!("Failed to load realization report {}", input.display()))?;

        let mut skus: SkuAggregator<OzonSkuAggregate> = SkuAggregator::new();
        let mut rows_skipped = 0usize;
        let mut rows_aggregated = 0usize;

        for row in &rows {
            // Итоговые строки и подвал отчёта идут без номера п/п
            if !is_report_line(row)? {
                rows_skipped += 1;
                continue;
            }
            let tx = normalize(row)?;
            if tx.is_empty_movement() {
                rows_skipped += 1;
                continue;
            }
            skus.apply(&tx)?;
            rows_aggregated += 1;
        }

        let scope = file_name(input);
        let totals = ozon_totals(&scope, &skus, &self.mapping);
        let path = request.output_dir.join(output_file_name(input));
        write_table(&path, &to_export_table(&totals))?;

        tracing::info!(
            "Realization report {} converted: {} rows read, {} skipped, {} SKUs written to {}",
            scope,
            rows.len(),
            rows_skipped,
            totals.rows.len(),
            path.display()
        );

        Ok(ConvertResponse {
            input_file: input.display().to_string(),
            rows_read: rows.len(),
            rows_skipped,
            rows_aggregated,
            output: WrittenFile {
                scope,
                path,
                sku_count: totals.rows.len(),
            },
        })
    }

    /// Конвертировать все отчёты каталога по очереди.
    ///
    /// Нечитаемый или некорректный файл пропускается с записью в лог.
    /// Ошибка маршрутизации по артикулу прерывает весь пакет.
    pub fn execute_batch(&self, request: &BatchConvertRequest) -> Result<BatchConvertResponse> {
        let files = discover_reports(&request.input_dir)?;
        let mut response = BatchConvertResponse::default();

        for input_path in files {
            let single = ConvertRequest {
                input_path: input_path.clone(),
                output_dir: request.output_dir.clone(),
            };

            match self.execute(&single) {
                Ok(converted) => response.converted.push(converted),
                Err(e) => {
                    if let Some(ConvertError::RoutingMismatch { .. }) = convert_error(&e) {
                        return Err(e);
                    }
                    tracing::error!("Skipping {}: {:#}", input_path.display(), e);
                    response.failed.push(FailedFile {
                        input_file: input_path.display().to_string(),
                        error: to_usecase_error(&input_path, &e),
                    });
                }
            }
        }

        tracing::info!(
            "Batch finished: {} converted, {} failed",
            response.converted.len(),
            response.failed.len()
        );
        Ok(response)
    }
}

fn convert_error(err: &anyhow::Error) -> Option<&ConvertError> {
    err.chain().find_map(|e| e.downcast_ref::<ConvertError>())
}

fn to_usecase_error(path: &Path, err: &anyhow::Error) -> UseCaseError {
    match convert_error(err) {
        Some(ConvertError::FileRead { message, .. }) => UseCaseError::file_read(path, message.clone()),
        Some(other) => UseCaseError::invalid_input(other.to_string()),
        None => UseCaseError::internal(format!("{:#}", err)),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// "1C-" + имя исходного файла; не-xlsx источники получают расширение .xlsx
fn output_file_name(input: &Path) -> String {
    let is_xlsx = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if is_xlsx {
        format!("1C-{}", file_name(input))
    } else {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("1C-{}.xlsx", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a102_ozon_realization_row::normalizer::*;
    use crate::shared::excel::ExportTable;
    use contracts::shared::CellValue;

    const HEADER_SKIP: usize = 11;

    /// (№ п/п, sku, sold qty, sold price, sold sum, sold commission,
    ///  returned qty, returned sum, return commission)
    type Line<'a> = (Option<i64>, &'a str, i64, f64, f64, f64, i64, f64, f64);

    /// Файл в форме выгрузки Ozon: 11 строк шапки, двухуровневый заголовок
    fn write_report(path: &Path, lines: &[Line]) {
        let blank = || CellValue::Null;
        let mut rows: Vec<Vec<CellValue>> = Vec::new();

        // writer puts its own header in row 1, so shift by one
        rows.push(vec!["Отчёт о реализации товара".into()]);
        for _ in 1..HEADER_SKIP - 1 {
            rows.push(vec![blank()]);
        }
        rows.push(vec![
            COL_LINE_NUMBER.into(),
            COL_SKU.into(),
            CAT_SOLD.into(),
            blank(),
            blank(),
            blank(),
            CAT_RETURNED.into(),
            blank(),
            blank(),
            blank(),
        ]);
        let fields = [FIELD_QTY, FIELD_PRICE, FIELD_SUM, FIELD_COMMISSION];
        let mut sub = vec![blank(), blank()];
        sub.extend(fields.iter().map(|f| CellValue::from(*f)));
        sub.extend(fields.iter().map(|f| CellValue::from(*f)));
        rows.push(sub);

        for (n, sku, sq, sp, ss, sc, rq, rs, rc) in lines {
            rows.push(vec![
                n.map(CellValue::Integer).unwrap_or(CellValue::Null),
                CellValue::Text(sku.to_string()),
                CellValue::Integer(*sq),
                CellValue::Number(*sp),
                CellValue::Number(*ss),
                CellValue::Number(*sc),
                CellValue::Integer(*rq),
                CellValue::Number(if *rq > 0 { *rs / *rq as f64 } else { 0.0 }),
                CellValue::Number(*rs),
                CellValue::Number(*rc),
            ]);
        }

        write_table(
            path,
            &ExportTable {
                columns: vec!["ООО Продавец"],
                rows,
            },
        )
        .unwrap();
    }

    fn executor(mapping: SkuMapping) -> ConvertExecutor {
        ConvertExecutor::new(
            mapping,
            &OzonConfig {
                skip_rows: HEADER_SKIP,
            },
        )
    }

    #[test]
    fn test_converts_sale_and_return_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("декабрь 2019.xlsx");
        write_report(
            &input,
            &[
                (Some(1), "A", 3, 100.0, 300.0, 10.0, 0, 0.0, 0.0),
                (Some(2), "B", 0, 0.0, 0.0, 0.0, 0, 0.0, 0.0),
                (Some(3), "A", 0, 0.0, 0.0, 0.0, 1, 100.0, 5.0),
                (None, "Итого", 3, 0.0, 300.0, 10.0, 1, 100.0, 5.0),
            ],
        );

        let output_dir = dir.path().join("output").join("ozon");
        let response = executor(SkuMapping::from_pairs([("A", "ASKU-A")]))
            .execute(&ConvertRequest {
                input_path: input,
                output_dir: output_dir.clone(),
            })
            .unwrap();

        assert_eq!(response.rows_read, 4);
        assert_eq!(response.rows_skipped, 2);
        assert_eq!(response.rows_aggregated, 2);
        assert_eq!(response.output.scope, "декабрь 2019.xlsx");
        assert_eq!(response.output.path, output_dir.join("1C-декабрь 2019.xlsx"));

        let out = read_table(&response.output.path, &TableLayout::single_header()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text("Артикул").unwrap(), "ASKU-A");
        assert_eq!(out[0].text("Артикул поставщика").unwrap(), "A");
        assert_eq!(out[0].integer_or("Количество", 0).unwrap(), 2);
        assert_eq!(out[0].amount("Сумма").unwrap(), 195.0);
        assert_eq!(out[0].amount("Цена").unwrap(), 97.5);
        assert_eq!(out[0].amount("Комиссия за возвраты").unwrap(), 5.0);
    }

    #[test]
    fn test_batch_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("ozon");
        std::fs::create_dir(&input_dir).unwrap();
        write_report(
            &input_dir.join("январь 2020.xlsx"),
            &[(Some(1), "A", 1, 50.0, 50.0, 5.0, 0, 0.0, 0.0)],
        );
        std::fs::write(input_dir.join("битый.xlsx"), b"not a workbook").unwrap();
        std::fs::write(input_dir.join("~$январь 2020.xlsx"), b"lock").unwrap();

        let output_dir = dir.path().join("output");
        let response = executor(SkuMapping::default())
            .execute_batch(&BatchConvertRequest {
                input_dir,
                output_dir: output_dir.clone(),
            })
            .unwrap();

        assert_eq!(response.converted.len(), 1);
        assert_eq!(response.failed.len(), 1);
        assert!(response.failed[0].input_file.ends_with("битый.xlsx"));
        assert_eq!(response.failed[0].error.code, "FILE_READ_ERROR");
        assert!(output_dir.join("1C-январь 2020.xlsx").exists());
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("data/ozon/декабрь 2019.xlsx")),
            "1C-декабрь 2019.xlsx"
        );
        assert_eq!(output_file_name(Path::new("data/ozon/dec.csv")), "1C-dec.xlsx");
    }
}
