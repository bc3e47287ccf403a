//! Date-keyed sums and week/month bucketing of household transactions.

use std::collections::BTreeMap;

use budget_domain::{
    parse_amount, DateKey, Identifiable, Language, MonthBucket, MonthIndex, PeriodTotals,
    Transaction, TransactionKind, WeekBucket,
};
use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

/// Pure aggregation over a snapshot of transactions.
///
/// Nothing is cached: every call walks the slice it is given, so repeated
/// calls on an unchanged slice return identical results.
pub struct TransactionAggregator;

impl TransactionAggregator {
    /// Sums amounts of every transaction dated exactly `date_key`, regardless of kind.
    pub fn sum_for_date(transactions: &[Transaction], date_key: &str) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.date_key() == date_key)
            .map(magnitude)
            .sum()
    }

    /// Like [`Self::sum_for_date`] but restricted to one kind.
    pub fn sum_for_date_by_kind(
        transactions: &[Transaction],
        date_key: &str,
        kind: TransactionKind,
    ) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind() == kind && txn.date_key() == date_key)
            .map(magnitude)
            .sum()
    }

    /// Date key to summed amount, kind ignored.
    pub fn sums_by_date(transactions: &[Transaction]) -> BTreeMap<DateKey, f64> {
        let mut sums = BTreeMap::new();
        for txn in transactions {
            *sums.entry(txn.date_key()).or_insert(0.0) += magnitude(txn);
        }
        sums
    }

    /// Date key to net amount: income adds, expense subtracts.
    pub fn net_by_date(transactions: &[Transaction]) -> BTreeMap<DateKey, f64> {
        let mut sums = BTreeMap::new();
        for txn in transactions {
            *sums.entry(txn.date_key()).or_insert(0.0) += txn.kind().sign() * magnitude(txn);
        }
        sums
    }

    /// Overall income and expense across the slice.
    pub fn totals(transactions: &[Transaction]) -> PeriodTotals {
        transactions
            .iter()
            .fold(PeriodTotals::default(), |mut totals, txn| {
                totals.record(txn.kind(), magnitude(txn));
                totals
            })
    }

    /// Sunday-based week of the year: `ceil((day_of_year0 + weekday(Jan 1) + 1) / 7)`.
    ///
    /// This is not an ISO-8601 week number. January 1 is always in week 1, and
    /// weeks roll over on Sunday.
    pub fn week_number(date: NaiveDate) -> u32 {
        let day_of_year = date.ordinal0();
        let weekday = date.weekday().num_days_from_sunday();
        let jan_first_weekday = (weekday + 7 - day_of_year % 7) % 7;
        (day_of_year + jan_first_weekday + 1).div_ceil(7)
    }

    /// Sunday on or before `date`; may fall in the previous month or year.
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        let back = u64::from(date.weekday().num_days_from_sunday());
        date.checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Groups by `(year, week_number)`, most recent week first.
    ///
    /// The key uses the transaction date's own year even when the week's
    /// Sunday lies in December of the previous year, so a week spanning New
    /// Year is split into two buckets whose date ranges overlap.
    pub fn group_by_week(transactions: &[Transaction]) -> Vec<WeekBucket> {
        let mut weeks: BTreeMap<(i32, u32), WeekBucket> = BTreeMap::new();

        for txn in transactions {
            let date = txn.date();
            let year = date.year();
            let week_number = Self::week_number(date);
            let bucket = weeks.entry((year, week_number)).or_insert_with(|| {
                let start = Self::week_start(date);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
                WeekBucket::new(year, week_number, start, end)
            });
            bucket.totals.record(txn.kind(), magnitude(txn));
            bucket.transactions.push(txn.clone());
        }

        debug!(
            transactions = transactions.len(),
            buckets = weeks.len(),
            "grouped transactions by week"
        );
        weeks.into_values().rev().collect()
    }

    /// Groups by `(year, month)`, most recent month first, labelled in `language`.
    pub fn group_by_month(transactions: &[Transaction], language: Language) -> Vec<MonthBucket> {
        let mut months: BTreeMap<(i32, MonthIndex), MonthBucket> = BTreeMap::new();

        for txn in transactions {
            let date = txn.date();
            let year = date.year();
            let month = MonthIndex::of(date);
            let bucket = months
                .entry((year, month))
                .or_insert_with(|| MonthBucket::new(year, month, language.month_name(month)));
            bucket.totals.record(txn.kind(), magnitude(txn));
            bucket.transactions.push(txn.clone());
        }

        debug!(
            transactions = transactions.len(),
            buckets = months.len(),
            "grouped transactions by month"
        );
        months.into_values().rev().collect()
    }
}

/// Amounts are magnitudes: negative and unparseable text both count as zero.
fn magnitude(txn: &Transaction) -> f64 {
    match parse_amount(txn.raw_amount()) {
        Some(value) if value >= 0.0 => value,
        Some(value) => {
            warn!(id = %txn.id(), amount = value, "negative amount counted as zero");
            0.0
        }
        None => {
            if !txn.raw_amount().trim().is_empty() {
                warn!(id = %txn.id(), amount = txn.raw_amount(), "unparseable amount counted as zero");
            }
            0.0
        }
    }
}
