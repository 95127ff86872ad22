pub mod request;
pub mod response;

pub use request::ConvertRequest;
pub use response::ConvertResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ConvertYmPayments;

impl UseCaseMetadata for ConvertYmPayments {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "convert_ym_payments"
    }

    fn display_name() -> &'static str {
        "Конвертация отчёта по платежам Яндекс Маркета"
    }
}
