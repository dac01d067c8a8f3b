use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every failure raised by a collaborator is mapped to one of these kinds at
/// the service boundary; raw persistence errors never reach a controller.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules (malformed or missing input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested entity or referenced relationship absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness or foreign-key constraint violated
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Conflicting concurrent update, retryable by the caller
    #[error("Concurrent modification: {0}")]
    Concurrency(String),

    /// Transactional infrastructure failure, not retried automatically
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Insert or stored-procedure path failed to produce a valid identifier
    #[error("Creation failed: {0}")]
    Creation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors, original cause kept for diagnostics
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Integrity(_) => StatusCode::CONFLICT,
            AppError::Concurrency(_) => StatusCode::CONFLICT,
            AppError::Transaction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Creation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn creation(msg: impl Into<String>) -> Self {
        AppError::Creation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = std::result::Result<T, PersistenceError>;

/// Failures surfaced by the persistence layer.
///
/// Repositories translate driver errors into these variants; the service
/// layer maps them onto [`AppError`] kinds via [`AppError::from`].
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    /// Optimistic version check failed: the row changed between read and write
    #[error("conflicting concurrent update on {entity} id {id}")]
    Conflict { entity: &'static str, id: i64 },

    /// UNIQUE constraint violated
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// FOREIGN KEY constraint violated
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Failure beginning, committing, or rolling back a transaction
    #[error("transaction failure: {0}")]
    Transaction(String),

    /// Any other store-level failure, original cause preserved
    #[error("database failure: {0}")]
    Other(#[source] anyhow::Error),
}

impl PersistenceError {
    /// Classify a driver error raised by an ordinary statement.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return PersistenceError::UniqueViolation(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return PersistenceError::ForeignKeyViolation(db_err.message().to_string());
            }
        }
        PersistenceError::Other(anyhow::Error::new(err))
    }

    /// A transaction begin/commit/rollback failure.
    pub fn transaction(err: sqlx::Error) -> Self {
        PersistenceError::Transaction(err.to_string())
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Conflict { .. } => AppError::Concurrency(err.to_string()),
            PersistenceError::UniqueViolation(_) | PersistenceError::ForeignKeyViolation(_) => {
                AppError::Integrity(err.to_string())
            }
            PersistenceError::Transaction(_) => AppError::Transaction(err.to_string()),
            PersistenceError::Other(_) => AppError::Internal(err.to_string()),
        }
    }
}
