//! Чтение и запись табличных файлов (xlsx/xls/ods через calamine, csv, запись xlsx)

pub mod raw_row;
pub mod reader;
pub mod writer;

pub use raw_row::RawRow;
pub use reader::{column_key, read_table, HeaderRows, TableLayout};
pub use writer::{write_table, ExportTable};
