pub mod batch;
pub mod executor;

pub use batch::discover_reports;
pub use executor::ConvertExecutor;
