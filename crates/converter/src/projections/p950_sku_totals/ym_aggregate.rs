use super::aggregator::SkuAggregate;
use crate::shared::error::ConvertError;
use contracts::domain::a101_ym_payment_transaction::{YmPaymentTransaction, YmTransactionKind};
use std::collections::HashSet;

/// Итоги по артикулу в отчёте по платежам Яндекс Маркета.
///
/// По одному заказу в отчёте бывает несколько строк (доплаты, корректировки).
/// Количество учитывается только по первой строке заказа, сумма - по всем.
#[derive(Debug, Clone)]
pub struct YmSkuAggregate {
    sku: String,
    quantity: i64,
    total: f64,
    /// Учтённые заказы; только растёт
    orders: HashSet<String>,
}

impl YmSkuAggregate {
    pub fn has_order(&self, order_number: &str) -> bool {
        self.orders.contains(order_number)
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

/// Изменение количества по типу транзакции: начисление +, возврат −
fn quantity_delta(tx: &YmPaymentTransaction) -> Option<i64> {
    match tx.kind {
        YmTransactionKind::Charge => Some(tx.quantity),
        YmTransactionKind::Return if tx.quantity != 0 => Some(-tx.quantity),
        YmTransactionKind::Return => {
            tracing::warn!(
                "Return without quantity: order {} SKU {} (row {}), quantity unchanged",
                tx.order_number,
                tx.sku,
                tx.source_line
            );
            None
        }
        YmTransactionKind::Unknown => {
            tracing::debug!(
                "Transaction kind not recognized for order {} (row {}), quantity unchanged",
                tx.order_number,
                tx.source_line
            );
            None
        }
    }
}

impl SkuAggregate for YmSkuAggregate {
    type Transaction = YmPaymentTransaction;

    fn open(tx: &YmPaymentTransaction) -> Self {
        Self {
            sku: tx.sku.clone(),
            quantity: quantity_delta(tx).unwrap_or(0),
            total: tx.amount,
            orders: HashSet::from([tx.order_number.clone()]),
        }
    }

    fn fold(&mut self, tx: &YmPaymentTransaction) -> Result<(), ConvertError> {
        self.ensure_routed(tx)?;

        if self.orders.insert(tx.order_number.clone()) {
            if let Some(delta) = quantity_delta(tx) {
                self.quantity += delta;
            }
            self.total += tx.amount;
            tracing::debug!(
                "SKU {}: order {} counted, qty {}",
                self.sku,
                tx.order_number,
                tx.quantity
            );
            return Ok(());
        }

        // Заказ уже учтён: доплаты и корректировки идут только в сумму
        match tx.kind {
            YmTransactionKind::Charge | YmTransactionKind::Return => {
                self.total += tx.amount;
            }
            YmTransactionKind::Unknown => {
                tracing::debug!(
                    "SKU {}: extra line of order {} with unrecognized kind skipped (row {})",
                    self.sku,
                    tx.order_number,
                    tx.source_line
                );
            }
        }
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
