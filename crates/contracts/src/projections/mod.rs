pub mod p950_sku_totals;
