use crate::shared::error::ConvertError;
use contracts::domain::common::SkuKeyed;
use std::collections::HashMap;

/// Накопитель итогов по одному артикулу
pub trait SkuAggregate: Sized {
    type Transaction: SkuKeyed;

    /// Первый накопитель для артикула транзакции
    fn open(tx: &Self::Transaction) -> Self;

    /// Учесть очередную транзакцию того же артикула
    fn fold(&mut self, tx: &Self::Transaction) -> Result<(), ConvertError>;

    fn sku(&self) -> &str;

    fn quantity(&self) -> i64;

    fn total(&self) -> f64;

    /// Средняя цена за единицу; при нулевом количестве ровно 0
    fn average(&self) -> f64 {
        if self.quantity() == 0 {
            0.0
        } else {
            self.total() / self.quantity() as f64
        }
    }

    /// Транзакция чужого артикула - ошибка маршрутизации, продолжать нельзя
    fn ensure_routed(&self, tx: &Self::Transaction) -> Result<(), ConvertError> {
        if tx.sku() != self.sku() {
            tracing::error!(
                "SKU mismatch: transaction for '{}' routed to '{}'",
                tx.sku(),
                self.sku()
            );
            return Err(ConvertError::RoutingMismatch {
                aggregate_sku: self.sku().to_string(),
                transaction_sku: tx.sku().to_string(),
                line: tx.source_line(),
            });
        }
        Ok(())
    }
}

/// Накопители по артикулам в пределах одной области (месяц или файл).
///
/// Один артикул - ровно один накопитель. Порядок обхода - порядок
/// первого появления артикула.
#[derive(Debug, Clone)]
pub struct SkuAggregator<A> {
    aggregates: Vec<A>,
    index: HashMap<String, usize>,
}

impl<A> Default for SkuAggregator<A> {
    fn default() -> Self {
        Self {
            aggregates: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<A: SkuAggregate> SkuAggregator<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert: создаёт накопитель для нового артикула или обновляет существующий
    pub fn apply(&mut self, tx: &A::Transaction) -> Result<&A, ConvertError> {
        let idx = match self.index.get(tx.sku()) {
            Some(&idx) => {
                self.aggregates[idx].fold(tx)?;
                idx
            }
            None => {
                let idx = self.aggregates.len();
                self.aggregates.push(A::open(tx));
                self.index.insert(tx.sku().to_string(), idx);
                idx
            }
        };
        Ok(&self.aggregates[idx])
    }

    pub fn get(&self, sku: &str) -> Option<&A> {
        self.index.get(sku).map(|&idx| &self.aggregates[idx])
    }

    /// Средняя цена по артикулу; None - артикул в области не встречался
    pub fn average(&self, sku: &str) -> Option<f64> {
        self.get(sku).map(|a| a.average())
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.aggregates.iter()
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tx {
        sku: &'static str,
        qty: i64,
        amount: f64,
    }

    impl SkuKeyed for Tx {
        fn sku(&self) -> &str {
            self.sku
        }
        fn source_line(&self) -> usize {
            1
        }
    }

    #[derive(Debug)]
    struct Sum {
        sku: String,
        qty: i64,
        total: f64,
    }

    impl SkuAggregate for Sum {
        type Transaction = Tx;

        fn open(tx: &Tx) -> Self {
            Sum {
                sku: tx.sku.to_string(),
                qty: tx.qty,
                total: tx.amount,
            }
        }

        fn fold(&mut self, tx: &Tx) -> Result<(), ConvertError> {
            self.ensure_routed(tx)?;
            self.qty += tx.qty;
            self.total += tx.amount;
            Ok(())
        }

        fn sku(&self) -> &str {
            &self.sku
        }
        fn quantity(&self) -> i64 {
            self.qty
        }
        fn total(&self) -> f64 {
            self.total
        }
    }

    #[test]
    fn test_one_aggregate_per_sku_in_first_seen_order() {
        let mut agg: SkuAggregator<Sum> = SkuAggregator::new();
        for (sku, qty) in [("B", 1), ("A", 2), ("B", 3), ("C", 1), ("A", 1)] {
            agg.apply(&Tx {
                sku,
                qty,
                amount: 10.0,
            })
            .unwrap();
        }

        let order: Vec<&str> = agg.iter().map(|a| a.sku()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(agg.get("B").unwrap().quantity(), 4);
        assert_eq!(agg.get("A").unwrap().total(), 20.0);
        assert_eq!(agg.len(), 3);
    }

    #[test]
    fn test_average_zero_quantity_is_zero() {
        let mut agg: SkuAggregator<Sum> = SkuAggregator::new();
        agg.apply(&Tx {
            sku: "A",
            qty: 2,
            amount: 300.0,
        })
        .unwrap();
        agg.apply(&Tx {
            sku: "A",
            qty: -2,
            amount: 50.0,
        })
        .unwrap();

        assert_eq!(agg.average("A"), Some(0.0));
        assert_eq!(agg.average("missing"), None);
    }

    #[test]
    fn test_fold_rejects_foreign_sku() {
        let mut sum = Sum::open(&Tx {
            sku: "A",
            qty: 1,
            amount: 1.0,
        });
        let err = sum
            .fold(&Tx {
                sku: "B",
                qty: 1,
                amount: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, ConvertError::RoutingMismatch { .. }));
        assert_eq!(sum.quantity(), 1);
    }
}
