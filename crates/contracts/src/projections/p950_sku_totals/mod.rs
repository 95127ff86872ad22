pub mod dto;

pub use dto::{SkuTotalsRow, SkuTotalsTable};
