pub mod normalizer;

pub use normalizer::{is_report_line, normalize};
