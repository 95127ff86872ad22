//! Common types and traits for all marketplace transactions

pub mod sku_keyed;

// Re-exports
pub use sku_keyed::SkuKeyed;
