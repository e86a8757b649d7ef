//! Error handling module
//!
//! Centralized error types for the library and the demo binary.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Environment errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Short machine-readable code for logs
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;

        match self {
            AppError::Domain(domain_err) => match domain_err {
                DomainError::InvalidRange { .. } => "invalid_range",
                DomainError::DestinationNotFound(_) => "destination_not_found",
                DomainError::OfferGroupNotFound(_) => "offer_group_not_found",
                DomainError::OfferNotAvailable { .. } => "offer_not_available",
                DomainError::UnknownEventType(_) => "unknown_event_type",
                DomainError::UnknownSortType(_) => "unknown_sort_type",
                DomainError::InvalidDateFormat(_) => "invalid_date_format",
                DomainError::EmptyCatalog(_) => "empty_catalog",
                DomainError::InvalidPrice(_) => "invalid_price",
                DomainError::InvalidDateRange => "invalid_date_range",
                DomainError::IncompleteForm(_) => "incomplete_form",
            },
            AppError::InvalidArgument(_) => "invalid_argument",
            AppError::Config(_) => "config_error",
            AppError::Catalog(_) => "catalog_error",
            AppError::Io(_) => "io_error",
            AppError::Render(_) => "render_error",
        }
    }
}
