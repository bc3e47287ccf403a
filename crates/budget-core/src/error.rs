use budget_domain::CalendarError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}
