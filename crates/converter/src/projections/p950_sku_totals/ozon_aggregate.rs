use super::aggregator::SkuAggregate;
use crate::shared::error::ConvertError;
use contracts::domain::a102_ozon_realization_row::OzonRealizationRow;

/// Итоги по артикулу в отчёте о реализации Ozon.
/// Дедупликации по заказам нет: каждая строка отчёта - отдельное движение.
#[derive(Debug, Clone)]
pub struct OzonSkuAggregate {
    sku: String,
    quantity: i64,
    total: f64,
    last_sell_price: f64,
    last_return_commission: f64,
}

impl OzonSkuAggregate {
    /// Цена реализации из последней учтённой строки
    pub fn last_sell_price(&self) -> f64 {
        self.last_sell_price
    }

    /// Комиссия за возвраты из последней учтённой строки
    pub fn last_return_commission(&self) -> f64 {
        self.last_return_commission
    }
}

impl SkuAggregate for OzonSkuAggregate {
    type Transaction = OzonRealizationRow;

    fn open(tx: &OzonRealizationRow) -> Self {
        Self {
            sku: tx.sku.clone(),
            quantity: tx.net_quantity(),
            total: tx.net_amount(),
            last_sell_price: tx.sold_price,
            last_return_commission: tx.return_commission,
        }
    }

    fn fold(&mut self, tx: &OzonRealizationRow) -> Result<(), ConvertError> {
        self.ensure_routed(tx)?;

        self.quantity += tx.net_quantity();
        self.total += tx.net_amount();
        self.last_sell_price = tx.sold_price;
        self.last_return_commission = tx.return_commission;
        Ok(())
    }

    fn sku(&self) -> &str {
        &self.sku
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn total(&self) -> f64 {
        self.total
    }
}
