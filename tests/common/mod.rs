#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use family_budget::{config::Config, services::FixedClock, Household};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn temp_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Household pinned to 15 June 2025 with the given locale.
pub fn household(locale: &str) -> Household {
    let config = Config {
        locale: locale.to_string(),
        ..Config::default()
    };
    Household::with_clock(config, FixedClock(date(2025, 6, 15)))
}

/// A small household spread over June 2025 and the turn of the year.
pub fn seeded_household(locale: &str) -> Household {
    let mut home = household(locale);
    home.add_income("30000", "salary", "June salary", date(2025, 6, 1))
        .expect("salary");
    home.add_expense("100", "food", "", date(2025, 6, 1)).expect("food");
    home.add_expense("50", "food", "", date(2025, 6, 1)).expect("food");
    home.add_expense("10", "transportation", "bus", date(2025, 6, 2))
        .expect("bus");
    home.add_income("5000", "bonus", "", date(2024, 12, 31))
        .expect("bonus");
    home.add_expense("1200", "entertainment", "party", date(2025, 1, 1))
        .expect("party");
    home
}
