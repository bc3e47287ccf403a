//! budget-core
//!
//! Calendar and aggregation services for the family budget.
//! Depends on budget-domain. No rendering, no persistence.

pub mod calendar_service;
pub mod error;
pub mod format;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

pub use calendar_service::*;
pub use error::CoreError;
pub use format::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;
