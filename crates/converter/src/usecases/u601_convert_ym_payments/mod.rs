pub mod executor;

pub use executor::ConvertExecutor;
