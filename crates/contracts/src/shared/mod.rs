pub mod cell;

pub use cell::CellValue;
