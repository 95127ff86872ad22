use super::aggregator::{SkuAggregate, SkuAggregator};
use super::ozon_aggregate::OzonSkuAggregate;
use super::ym_aggregate::YmSkuAggregate;
use crate::shared::excel::ExportTable;
use crate::shared::sku_mapping::SkuMapping;
use contracts::enums::MarketplaceType;
use contracts::projections::p950_sku_totals::{SkuTotalsRow, SkuTotalsTable};
use contracts::shared::CellValue;

fn totals_row<A: SkuAggregate>(aggregate: &A, mapping: &SkuMapping) -> SkuTotalsRow {
    SkuTotalsRow {
        accounting_sku: mapping.resolve(aggregate.sku()).to_string(),
        seller_sku: aggregate.sku().to_string(),
        quantity: aggregate.quantity(),
        average_price: aggregate.average(),
        total: aggregate.total(),
        return_commission: None,
    }
}

/// Итоги месяца отчёта по платежам Яндекс Маркета
pub fn ym_totals(
    scope: &str,
    skus: &SkuAggregator<YmSkuAggregate>,
    mapping: &SkuMapping,
) -> SkuTotalsTable {
    SkuTotalsTable {
        marketplace: MarketplaceType::YandexMarket,
        scope: scope.to_string(),
        rows: skus.iter().map(|a| totals_row(a, mapping)).collect(),
    }
}

/// Итоги отчёта о реализации Ozon
pub fn ozon_totals(
    scope: &str,
    skus: &SkuAggregator<OzonSkuAggregate>,
    mapping: &SkuMapping,
) -> SkuTotalsTable {
    SkuTotalsTable {
        marketplace: MarketplaceType::Ozon,
        scope: scope.to_string(),
        rows: skus
            .iter()
            .map(|a| SkuTotalsRow {
                return_commission: Some(a.last_return_commission()),
                ..totals_row(a, mapping)
            })
            .collect(),
    }
}

/// Итоги -> таблица для записи в xlsx, колонки по шаблону маркетплейса
pub fn to_export_table(table: &SkuTotalsTable) -> ExportTable {
    let with_commission = table.marketplace == MarketplaceType::Ozon;

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                CellValue::Text(row.accounting_sku.clone()),
                CellValue::Text(row.seller_sku.clone()),
                CellValue::Integer(row.quantity),
                CellValue::Number(row.average_price),
            ];
            if with_commission {
                cells.push(CellValue::Number(row.return_commission.unwrap_or(0.0)));
            }
            cells.push(CellValue::Number(row.total));
            cells
        })
        .collect();

    ExportTable {
        columns: table.columns(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a102_ozon_realization_row::OzonRealizationRow;
    use contracts::projections::p950_sku_totals::dto::{COL_RETURN_COMMISSION, COL_TOTAL};

    fn ozon_row(sku: &str, sold_qty: i64, sold_amount: f64) -> OzonRealizationRow {
        OzonRealizationRow {
            source_line: 14,
            sku: sku.to_string(),
            sold_qty,
            sold_price: 100.0,
            sold_amount,
            sold_commission: 0.0,
            returned_qty: 0,
            returned_price: 0.0,
            returned_amount: 0.0,
            return_commission: 3.0,
        }
    }

    #[test]
    fn test_ozon_rows_translated_in_first_seen_order() {
        let mut skus: SkuAggregator<OzonSkuAggregate> = SkuAggregator::new();
        skus.apply(&ozon_row("X2", 2, 200.0)).unwrap();
        skus.apply(&ozon_row("X1", 1, 90.0)).unwrap();
        let mapping = SkuMapping::from_pairs([("X2", "ASKU-X2")]);

        let totals = ozon_totals("декабрь 2019.xlsx", &skus, &mapping);
        assert_eq!(totals.rows.len(), 2);
        assert_eq!(totals.rows[0].accounting_sku, "ASKU-X2");
        assert_eq!(totals.rows[0].seller_sku, "X2");
        // 200 sold + 3 return commission
        assert_eq!(totals.rows[0].total, 203.0);
        assert_eq!(totals.rows[0].average_price, 101.5);
        assert_eq!(totals.rows[0].return_commission, Some(3.0));
        assert_eq!(totals.rows[1].accounting_sku, "X1");

        let table = to_export_table(&totals);
        assert_eq!(table.columns[4], COL_RETURN_COMMISSION);
        assert_eq!(table.rows[0].len(), 6);
        assert_eq!(table.rows[0][4], CellValue::Number(3.0));
        assert_eq!(table.rows[0][5], CellValue::Number(203.0));
    }

    #[test]
    fn test_ym_table_has_no_commission_column() {
        let totals = SkuTotalsTable {
            marketplace: MarketplaceType::YandexMarket,
            scope: "1-2020".to_string(),
            rows: vec![SkuTotalsRow {
                accounting_sku: "ASKU-1".to_string(),
                seller_sku: "A-1".to_string(),
                quantity: 3,
                average_price: 133.5,
                total: 400.5,
                return_commission: None,
            }],
        };

        let table = to_export_table(&totals);
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.columns[4], COL_TOTAL);
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Text("ASKU-1".into()),
                CellValue::Text("A-1".into()),
                CellValue::Integer(3),
                CellValue::Number(133.5),
                CellValue::Number(400.5),
            ]
        );
    }
}
