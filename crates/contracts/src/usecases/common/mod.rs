//! Common types and traits for all UseCases

pub mod usecase_metadata;
pub mod usecase_result;
pub mod written_file;

// Re-exports
pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::UseCaseError;
pub use written_file::WrittenFile;
