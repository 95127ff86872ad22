use crate::domain::a101_ym_payment_transaction::{normalize, NormalizeOptions};
use crate::projections::p950_sku_totals::{
    to_export_table, ym_totals, PeriodBucketer, UndatedPolicy,
};
use crate::shared::config::YmConfig;
use crate::shared::excel::{read_table, write_table, TableLayout};
use crate::shared::sku_mapping::SkuMapping;
use anyhow::{Context, Result};
use contracts::usecases::common::{UseCaseMetadata, WrittenFile};
use contracts::usecases::u601_convert_ym_payments::{
    ConvertRequest, ConvertResponse, ConvertYmPayments,
};

/// Executor для UseCase конвертации отчёта по платежам Яндекс Маркета
pub struct ConvertExecutor {
    mapping: SkuMapping,
    options: NormalizeOptions,
    undated_policy: UndatedPolicy,
}

impl ConvertExecutor {
    pub fn new(mapping: SkuMapping, config: &YmConfig) -> Self {
        Self {
            mapping,
            options: NormalizeOptions {
                default_quantity: config.default_quantity,
            },
            undated_policy: config.undated_policy,
        }
    }

    /// Прочитать отчёт, разложить по месяцам оплаты и записать файл на каждый месяц
    pub fn execute(&self, request: &ConvertRequest) -> Result<ConvertResponse> {
        let input = &request.input_path;
        tracing::info!(
            "{} ({}): converting {}",
            ConvertYmPayments::display_name(),
            ConvertYmPayments::full_name(),
            input.display()
        );

        let rows = read_table(input, &TableLayout::single_header())
            .with_context(|| format!("Failed to load payment report {}", input.display()))?;

        let mut response = ConvertResponse {
            input_file: input.display().to_string(),
            rows_read: rows.len(),
            ..Default::default()
        };

        let mut bucketer = PeriodBucketer::new(self.undated_policy);
        for row in &rows {
            let tx = normalize(row, &self.options)?;
            if bucketer.route(&tx)?.is_some() {
                response.rows_aggregated += 1;
            }
        }
        response.rows_undated = bucketer.dropped();

        for bucket in bucketer.buckets() {
            let totals = ym_totals(&bucket.key, &bucket.skus, &self.mapping);
            let path = request.output_dir.join(format!("{}.xlsx", bucket.key));
            write_table(&path, &to_export_table(&totals))?;

            tracing::info!(
                "Period {}: {} SKUs written to {}",
                bucket.key,
                totals.rows.len(),
                path.display()
            );
            response.files.push(WrittenFile {
                scope: bucket.key.clone(),
                path,
                sku_count: totals.rows.len(),
            });
        }

        tracing::info!(
            "Payment report converted: {} rows read, {} aggregated, {} without payment date, {} files",
            response.rows_read,
            response.rows_aggregated,
            response.rows_undated,
            response.files.len()
        );

        Ok(response)
    }
}
