use crate::models::ProductId;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::UnknownPriceRange("cheap".to_string());
        assert_eq!(err.to_string(), "Unknown price range: cheap");

        let err = AppError::DuplicateProduct(ProductId::from("p1"));
        assert_eq!(err.to_string(), "Duplicate product id in catalog: p1");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
