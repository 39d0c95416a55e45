//! Centralized error handling for the whole application.

use derive_more::Display;

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Application Error: {}", _0)]
    Application(ApplicationError),
    #[display(fmt = "Infrastructure Error: {}", _0)]
    Infrastructure(InfrastructureError),
}

/// Domain layer specific errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DomainError {
    #[display(fmt = "Validation: {}", _0)]
    Validation(ValidationError),
}

/// Validation errors raised by value objects
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid token id: {}", _0)]
    InvalidTokenId(String),
    #[display(fmt = "Invalid dataset: {}", _0)]
    InvalidDataset(String),
}

/// Application layer errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ApplicationError {
    #[display(fmt = "Configuration: {}", _0)]
    Configuration(ConfigurationError),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigurationError {
    #[display(fmt = "Invalid parameter: {}", _0)]
    InvalidParameter(String),
    #[display(fmt = "Malformed configuration: {}", _0)]
    Malformed(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum InfrastructureError {
    #[display(fmt = "Network: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Repository: {}", _0)]
    Repository(RepositoryError),
    #[display(fmt = "Store: {}", _0)]
    Store(StoreError),
}

/// Network-related errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "HTTP request failed: {}", _0)]
    HttpRequestFailed(String),
    #[display(fmt = "HTTP status {}: {}", status, text)]
    HttpStatus { status: u16, text: String },
}

/// Payload decoding errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RepositoryError {
    #[display(fmt = "Parse error: {}", _0)]
    ParseError(String),
}

/// Watchlist store errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum StoreError {
    #[display(fmt = "Record not found: {}", _0)]
    NotFound(String),
    #[display(fmt = "Rejected record: {}", _0)]
    Rejected(String),
    #[display(fmt = "Store unavailable: {}", _0)]
    Unavailable(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for DomainError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ApplicationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for RepositoryError {}
impl std::error::Error for StoreError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        AppError::Application(error)
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Application(ApplicationError::Configuration(error))
    }
}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<RepositoryError> for InfrastructureError {
    fn from(error: RepositoryError) -> Self {
        InfrastructureError::Repository(error)
    }
}

impl From<StoreError> for InfrastructureError {
    fn from(error: StoreError) -> Self {
        InfrastructureError::Store(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Infrastructure(InfrastructureError::Store(error))
    }
}

/// Convenience alias used by the application layer
pub type AppResult<T> = Result<T, AppError>;
