//! Month grid generation and per-day decoration.

use budget_domain::{
    CalendarDay, CalendarError, CalendarPeriod, PeriodTotals, Transaction,
    TransactionKind, GRID_CELLS,
};
use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::summary_service::TransactionAggregator;
use crate::time::Clock;

/// Builds the fixed 42-cell, Sunday-first grid for a month.
pub struct CalendarGridBuilder;

impl CalendarGridBuilder {
    /// Produces six rows of seven days, row-major.
    ///
    /// The grid opens with the trailing days of the previous month (as many
    /// as the first of the month's weekday offset), continues through every
    /// day of the month and is topped up with leading days of the next month.
    pub fn build(period: CalendarPeriod) -> CalendarGrid {
        let days: Vec<CalendarDay> = period
            .grid_start()
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| CalendarDay::new(date, period.contains(date)))
            .collect();

        debug!(
            %period,
            offset = period.first_weekday_offset(),
            days_in_month = period.days_in_month(),
            "built calendar grid"
        );
        CalendarGrid { period, days }
    }

    /// Validating entry point for a raw zero-based month. Out-of-range months fail fast.
    pub fn build_for(year: i32, month0: u32) -> Result<CalendarGrid, CalendarError> {
        Ok(Self::build(CalendarPeriod::from_parts(year, month0)?))
    }
}

/// The cells of one month view.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    period: CalendarPeriod,
    days: Vec<CalendarDay>,
}

impl CalendarGrid {
    pub fn period(&self) -> CalendarPeriod {
        self.period
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
    }

    /// Six rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// The contiguous run of cells belonging to the requested month.
    pub fn current_month_days(&self) -> &[CalendarDay] {
        let start = self.period.first_weekday_offset() as usize;
        let end = start + self.period.days_in_month() as usize;
        &self.days[start..end]
    }
}

/// A grid cell decorated with the day's activity.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub day: CalendarDay,
    pub income: f64,
    pub expense: f64,
    pub is_today: bool,
}

impl CalendarCell {
    pub fn has_transactions(&self) -> bool {
        self.income > 0.0 || self.expense > 0.0
    }

    pub fn weekday(&self) -> Weekday {
        self.day.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Transactions recorded on a single day, with their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date_key: String,
    pub transactions: Vec<Transaction>,
    pub totals: PeriodTotals,
}

pub struct CalendarService;

impl CalendarService {
    /// Builds the grid for `period` and attaches each day's income and expense sums.
    pub fn month_view(
        period: CalendarPeriod,
        transactions: &[Transaction],
        clock: &dyn Clock,
    ) -> Vec<CalendarCell> {
        let today = clock.today();
        CalendarGridBuilder::build(period)
            .into_days()
            .into_iter()
            .map(|day| Self::decorate(day, transactions, today))
            .collect()
    }

    fn decorate(day: CalendarDay, transactions: &[Transaction], today: NaiveDate) -> CalendarCell {
        let key = day.date_key.as_str();
        let income =
            TransactionAggregator::sum_for_date_by_kind(transactions, key, TransactionKind::Income);
        let expense =
            TransactionAggregator::sum_for_date_by_kind(transactions, key, TransactionKind::Expense);
        CalendarCell {
            is_today: day.date == today,
            day,
            income,
            expense,
        }
    }

    /// Every transaction dated exactly `date_key`, in input order.
    pub fn transactions_on(transactions: &[Transaction], date_key: &str) -> DayDetail {
        let matching: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| txn.date_key() == date_key)
            .cloned()
            .collect();
        let totals = TransactionAggregator::totals(&matching);
        DayDetail {
            date_key: date_key.to_string(),
            transactions: matching,
            totals,
        }
    }
}
