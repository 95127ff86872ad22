pub mod common;
pub mod u601_convert_ym_payments;
pub mod u602_convert_ozon_realization;
