use serde::{Deserialize, Serialize};

/// Маркетплейсы, выгрузки которых умеет конвертировать система
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketplaceType {
    /// Отчёт по платежам (помесячная разбивка)
    YandexMarket,
    /// Отчёт о реализации (один файл = одна выгрузка)
    Ozon,
}
