pub mod config;
pub mod error;
pub mod excel;
pub mod sku_mapping;
