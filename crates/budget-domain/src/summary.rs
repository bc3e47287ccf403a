//! Period buckets produced by the transaction aggregator.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::MonthIndex;
use crate::transaction::{Transaction, TransactionKind};

/// Income and expense sums for a set of transactions. Both are magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
}

impl PeriodTotals {
    pub fn record(&mut self, kind: TransactionKind, amount: f64) {
        match kind {
            TransactionKind::Income => self.income += amount,
            TransactionKind::Expense => self.expense += amount,
        }
    }

    /// Income minus expense.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    pub fn is_empty(&self) -> bool {
        self.income == 0.0 && self.expense == 0.0
    }
}

/// Transactions sharing a `(year, week_number)` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    /// `"{year}-W{week_number}"`.
    pub key: String,
    pub year: i32,
    pub week_number: u32,
    /// Sunday on or before the first member's date. May fall in the previous year.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub totals: PeriodTotals,
}

impl WeekBucket {
    pub fn new(year: i32, week_number: u32, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            key: format!("{year}-W{week_number}"),
            year,
            week_number,
            start_date,
            end_date,
            transactions: Vec::new(),
            totals: PeriodTotals::default(),
        }
    }

    pub fn total_income(&self) -> f64 {
        self.totals.income
    }

    pub fn total_expense(&self) -> f64 {
        self.totals.expense
    }
}

/// Transactions sharing a `(year, month)` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    /// `"{year}-{MM}"` with the calendar month number.
    pub key: String,
    pub year: i32,
    pub month: MonthIndex,
    pub month_name: &'static str,
    pub transactions: Vec<Transaction>,
    pub totals: PeriodTotals,
}

impl MonthBucket {
    pub fn new(year: i32, month: MonthIndex, month_name: &'static str) -> Self {
        Self {
            key: format!("{year}-{:02}", month.number()),
            year,
            month,
            month_name,
            transactions: Vec::new(),
            totals: PeriodTotals::default(),
        }
    }

    pub fn total_income(&self) -> f64 {
        self.totals.income
    }

    pub fn total_expense(&self) -> f64 {
        self.totals.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_split_by_kind() {
        let mut totals = PeriodTotals::default();
        assert!(totals.is_empty());
        totals.record(TransactionKind::Income, 1000.0);
        totals.record(TransactionKind::Expense, 300.0);
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expense, 300.0);
        assert_eq!(totals.net(), 700.0);
    }

    #[test]
    fn bucket_keys() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let week = WeekBucket::new(2025, 23, start, start);
        assert_eq!(week.key, "2025-W23");
        let month = MonthBucket::new(2025, MonthIndex::new(5).unwrap(), "June");
        assert_eq!(month.key, "2025-06");
    }
}
