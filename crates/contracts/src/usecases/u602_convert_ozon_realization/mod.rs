pub mod request;
pub mod response;

pub use request::{BatchConvertRequest, ConvertRequest};
pub use response::{BatchConvertResponse, ConvertResponse, FailedFile};

use crate::usecases::common::UseCaseMetadata;

pub struct ConvertOzonRealization;

impl UseCaseMetadata for ConvertOzonRealization {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "convert_ozon_realization"
    }

    fn display_name() -> &'static str {
        "Конвертация отчёта о реализации Ozon"
    }
}
