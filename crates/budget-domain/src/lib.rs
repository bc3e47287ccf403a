//! budget-domain
//!
//! Pure domain models (Transaction, categories, calendar periods, summary buckets).
//! No I/O, no rendering. Only data types, label tables and core enums.

pub mod calendar;
pub mod category;
pub mod common;
pub mod locale;
pub mod summary;
pub mod transaction;

pub use calendar::*;
pub use category::*;
pub use common::*;
pub use locale::*;
pub use summary::*;
pub use transaction::*;
