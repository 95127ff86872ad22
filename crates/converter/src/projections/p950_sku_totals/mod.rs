//! Итоги по артикулам: накопление транзакций, помесячная разбивка, выгрузка в 1С

pub mod aggregator;
pub mod bucketer;
pub mod exporter;
pub mod ozon_aggregate;
pub mod ym_aggregate;

pub use aggregator::{SkuAggregate, SkuAggregator};
pub use bucketer::{period_key, PeriodBucket, PeriodBucketer, UndatedPolicy};
pub use exporter::{ozon_totals, to_export_table, ym_totals};
pub use ozon_aggregate::OzonSkuAggregate;
pub use ym_aggregate::YmSkuAggregate;
