use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Storage seam errors are reported unchanged as persistence failures.
impl From<Box<dyn std::error::Error + Send + Sync>> for ActivityLogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<ActivityLogError>() {
            Ok(err) => *err,
            Err(err) => ActivityLogError::Persistence(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ActivityLogError {
    fn from(err: serde_json::Error) -> Self {
        ActivityLogError::Persistence(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ActivityLogError {
    fn from(err: sqlx::Error) -> Self {
        ActivityLogError::Persistence(err.to_string())
    }
}
