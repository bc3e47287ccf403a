//! Calendar periods and the cells of a month grid.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::DateKey;

/// Number of cells in a month grid: six Sunday-first weeks.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i32),
}

/// Zero-based month, `0` = January through `11` = December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    pub fn new(zero_based: u32) -> Result<Self, CalendarError> {
        if zero_based > 11 {
            return Err(CalendarError::InvalidMonth(zero_based));
        }
        Ok(Self(zero_based))
    }

    /// Month of a concrete date.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month0())
    }

    pub fn zero_based(self) -> u32 {
        self.0
    }

    /// Calendar month number, `1` = January.
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        MonthIndex::new(value)
    }
}

impl From<MonthIndex> for u32 {
    fn from(month: MonthIndex) -> Self {
        month.0
    }
}

/// A (year, month) pair whose whole 42-day grid is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarPeriod {
    year: i32,
    month: MonthIndex,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    grid_start: NaiveDate,
}

impl CalendarPeriod {
    pub fn new(year: i32, month: MonthIndex) -> Result<Self, CalendarError> {
        let out_of_range = CalendarError::YearOutOfRange(year);
        let first_day =
            NaiveDate::from_ymd_opt(year, month.number(), 1).ok_or(out_of_range.clone())?;
        let offset = u64::from(first_day.weekday().num_days_from_sunday());
        let grid_start = first_day
            .checked_sub_days(Days::new(offset))
            .ok_or(out_of_range.clone())?;
        grid_start
            .checked_add_days(Days::new(GRID_CELLS as u64 - 1))
            .ok_or(out_of_range)?;
        Ok(Self {
            year,
            month,
            first_day,
            grid_start,
        })
    }

    /// Validating constructor for a raw zero-based month.
    pub fn from_parts(year: i32, month0: u32) -> Result<Self, CalendarError> {
        Self::new(year, MonthIndex::new(month0)?)
    }

    /// Period containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), MonthIndex::of(date))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Weekday column (0 = Sunday) of the first of the month.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// Sunday on or before the first of the month; the grid's first cell.
    pub fn grid_start(&self) -> NaiveDate {
        self.grid_start
    }

    pub fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month == MonthIndex::DECEMBER {
            (self.year + 1, 1)
        } else {
            (self.year, self.month.number() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            // The following month can only be missing at chrono's upper bound, which is December.
            .unwrap_or(31)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month.zero_based()
    }

    pub fn previous(&self) -> Result<Self, CalendarError> {
        if self.month == MonthIndex::JANUARY {
            Self::new(self.year - 1, MonthIndex::DECEMBER)
        } else {
            Self::new(self.year, MonthIndex(self.month.0 - 1))
        }
    }

    pub fn next(&self) -> Result<Self, CalendarError> {
        if self.month == MonthIndex::DECEMBER {
            Self::new(self.year + 1, MonthIndex::JANUARY)
        } else {
            Self::new(self.year, MonthIndex(self.month.0 + 1))
        }
    }
}

impl fmt::Display for CalendarPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

/// One cell of the 42-cell month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub current_month: bool,
    pub date_key: DateKey,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, current_month: bool) -> Self {
        Self {
            date,
            current_month,
            date_key: DateKey::from_date(date),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Grid column, `0` = Sunday.
    pub fn column(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }
}
