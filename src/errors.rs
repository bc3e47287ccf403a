use std::result::Result as StdResult;

use budget_config::ConfigError;
use budget_core::CoreError;
use budget_domain::CalendarError;
use thiserror::Error;

/// Error type that captures household-level failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<CalendarError> for BudgetError {
    fn from(err: CalendarError) -> Self {
        BudgetError::Core(CoreError::Calendar(err))
    }
}
