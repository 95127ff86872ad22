use super::aggregator::SkuAggregator;
use super::ym_aggregate::YmSkuAggregate;
use crate::shared::error::ConvertError;
use chrono::{Datelike, NaiveDate};
use contracts::domain::a101_ym_payment_transaction::YmPaymentTransaction;
use serde::Deserialize;
use std::collections::HashMap;

/// Что делать с транзакцией без даты платёжного поручения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndatedPolicy {
    /// Молча не учитывать (поручение ещё не сформировано)
    #[default]
    Drop,
    /// Не учитывать, но записать в лог каждую строку
    Warn,
    /// Остановить конвертацию файла
    Reject,
}

impl std::str::FromStr for UndatedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown undated policy '{}', expected drop, warn or reject",
                other
            )),
        }
    }
}

/// Ключ месяца: "1-2020" (месяц без ведущего нуля)
pub fn period_key(date: NaiveDate) -> String {
    format!("{}-{}", date.month(), date.year())
}

/// Итоги по артикулам за один месяц оплаты
#[derive(Debug, Clone)]
pub struct PeriodBucket {
    pub key: String,
    pub skus: SkuAggregator<YmSkuAggregate>,
}

/// Раскладывает транзакции по месяцам даты платёжного поручения
#[derive(Debug, Clone)]
pub struct PeriodBucketer {
    policy: UndatedPolicy,
    buckets: Vec<PeriodBucket>,
    index: HashMap<String, usize>,
    dropped: usize,
}

impl PeriodBucketer {
    pub fn new(policy: UndatedPolicy) -> Self {
        Self {
            policy,
            buckets: Vec::new(),
            index: HashMap::new(),
            dropped: 0,
        }
    }

    /// Учитывает транзакцию в её месяце.
    /// Возвращает ключ месяца или None, если транзакция отброшена без даты.
    pub fn route(&mut self, tx: &YmPaymentTransaction) -> Result<Option<&str>, ConvertError> {
        let Some(payment_date) = tx.payment_date else {
            return self.undated(tx).map(|_| None);
        };

        let key = period_key(payment_date);
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                tracing::debug!("New period bucket {}", key);
                let idx = self.buckets.len();
                self.buckets.push(PeriodBucket {
                    key: key.clone(),
                    skus: SkuAggregator::new(),
                });
                self.index.insert(key, idx);
                idx
            }
        };

        let bucket = &mut self.buckets[idx];
        bucket.skus.apply(tx)?;
        Ok(Some(bucket.key.as_str()))
    }

    fn undated(&mut self, tx: &YmPaymentTransaction) -> Result<(), ConvertError> {
        match self.policy {
            UndatedPolicy::Drop => {}
            UndatedPolicy::Warn => tracing::warn!(
                "No payment date: order {} SKU {} (row {}) not counted",
                tx.order_number,
                tx.sku,
                tx.source_line
            ),
            UndatedPolicy::Reject => {
                return Err(ConvertError::UndatedTransaction {
                    order: tx.order_number.clone(),
                    line: tx.source_line,
                })
            }
        }
        self.dropped += 1;
        Ok(())
    }

    /// Месяцы в порядке первого появления в отчёте
    pub fn buckets(&self) -> &[PeriodBucket] {
        &self.buckets
    }

    pub fn get(&self, key: &str) -> Option<&PeriodBucket> {
        self.index.get(key).map(|&idx| &self.buckets[idx])
    }

    /// Сколько транзакций отброшено без даты
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p950_sku_totals::SkuAggregate;
    use contracts::domain::a101_ym_payment_transaction::YmTransactionKind;

    fn tx(order: &str, sku: &str, payment_date: Option<(i32, u32, u32)>) -> YmPaymentTransaction {
        YmPaymentTransaction {
            source_line: 3,
            transaction_date: String::new(),
            transaction_id: String::new(),
            order_number: order.to_string(),
            order_date: String::new(),
            sku: sku.to_string(),
            sku_name: String::new(),
            quantity: 1,
            amount: 100.0,
            kind: YmTransactionKind::Charge,
            source: String::new(),
            payment_date: payment_date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            payment_number: String::new(),
            payment_sum: None,
        }
    }

    #[test]
    fn test_period_key_has_no_zero_padding() {
        assert_eq!(period_key(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()), "1-2020");
        assert_eq!(period_key(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap()), "12-2019");
    }

    #[test]
    fn test_same_month_same_bucket() {
        let mut b = PeriodBucketer::new(UndatedPolicy::Drop);
        assert_eq!(b.route(&tx("1", "A", Some((2020, 1, 15)))).unwrap(), Some("1-2020"));
        assert_eq!(b.route(&tx("2", "A", Some((2020, 1, 20)))).unwrap(), Some("1-2020"));

        assert_eq!(b.buckets().len(), 1);
        let bucket = b.get("1-2020").unwrap();
        assert_eq!(bucket.skus.get("A").unwrap().quantity(), 2);
    }

    #[test]
    fn test_buckets_are_independent_scopes() {
        let mut b = PeriodBucketer::new(UndatedPolicy::Drop);
        b.route(&tx("1", "A", Some((2019, 12, 30)))).unwrap();
        b.route(&tx("1", "A", Some((2020, 1, 3)))).unwrap();

        let keys: Vec<&str> = b.buckets().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["12-2019", "1-2020"]);
        // same order in another month is counted again there
        assert_eq!(b.get("1-2020").unwrap().skus.get("A").unwrap().quantity(), 1);
        assert_eq!(b.get("12-2019").unwrap().skus.get("A").unwrap().quantity(), 1);
    }

    #[test]
    fn test_undated_dropped() {
        let mut b = PeriodBucketer::new(UndatedPolicy::Drop);
        assert_eq!(b.route(&tx("1", "A", None)).unwrap(), None);
        assert!(b.buckets().is_empty());
        assert_eq!(b.dropped(), 1);

        let mut b = PeriodBucketer::new(UndatedPolicy::Warn);
        assert_eq!(b.route(&tx("1", "A", None)).unwrap(), None);
        assert_eq!(b.dropped(), 1);
    }

    #[test]
    fn test_undated_rejected() {
        let mut b = PeriodBucketer::new(UndatedPolicy::Reject);
        let err = b.route(&tx("42", "A", None)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UndatedTransaction { ref order, line: 3 } if order == "42"
        ));
        assert_eq!(b.dropped(), 0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Warn".parse::<UndatedPolicy>().unwrap(), UndatedPolicy::Warn);
        assert_eq!("reject".parse::<UndatedPolicy>().unwrap(), UndatedPolicy::Reject);
        assert!("skip".parse::<UndatedPolicy>().is_err());
    }
}
