use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ошибка выполнения UseCase (сериализуемая, для отчёта пакетной конвертации)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Файл не удалось прочитать или разобрать
    pub fn file_read(path: &Path, message: impl Into<String>) -> Self {
        Self::new("FILE_READ_ERROR", message).with_details(path.display().to_string())
    }

    /// Данные в файле не соответствуют ожидаемой схеме
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new("INVALID_INPUT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err = UseCaseError::file_read(Path::new("data/ozon/январь.xlsx"), "bad zip");
        assert_eq!(
            err.to_string(),
            "[FILE_READ_ERROR] bad zip: data/ozon/январь.xlsx"
        );
    }
}
