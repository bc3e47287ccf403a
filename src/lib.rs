#![doc(test(attr(deny(warnings))))]

//! Family Budget keeps a household's income and expense records in memory and
//! derives the month calendar and weekly/monthly summaries from them.

pub mod errors;
pub mod household;
pub mod utils;

pub use budget_config as config;
pub use budget_core as services;
pub use budget_domain as domain;

pub use errors::{BudgetError, Result};
pub use household::{BalanceStatus, Household, Overview};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("{}", utils::build_info::current().summary());
    });
}

/// Loads preferences from `base` (or the platform default) and opens an empty household.
pub fn open_household(base: Option<std::path::PathBuf>) -> Result<Household> {
    let base = base.unwrap_or_else(|| config::Config::default().resolve_base_dir());
    let manager = config::ConfigManager::with_base_dir(base)?;
    let settings = manager.load()?;
    tracing::debug!(
        path = %manager.config_path().display(),
        locale = %settings.locale,
        "loaded config"
    );
    Ok(Household::new(settings))
}
