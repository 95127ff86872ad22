pub mod a101_ym_payment_transaction;
pub mod a102_ozon_realization_row;
pub mod common;
