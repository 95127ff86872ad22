pub mod aggregate;

pub use aggregate::OzonRealizationRow;
