//! In-memory household: owns the transaction list and serves calendar and summary views.

use budget_config::Config;
use budget_core::{
    format_range, CalendarCell, CalendarService, Clock, CurrencyFormatter, DateFormatter,
    DayDetail, GroupedCurrency, LongDate, NumericDate, SystemClock, TransactionAggregator,
    TransactionDraft, TransactionService,
};
use budget_domain::{
    CalendarPeriod, CategoryCatalog, Language, MonthBucket, PeriodTotals, Transaction,
    TransactionKind, WeekBucket,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::Result;

/// Whether spending is covered by income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Healthy,
    Overspending,
}

/// Dashboard figures across every recorded transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub totals: PeriodTotals,
    pub balance: f64,
    pub status: BalanceStatus,
    /// Last entered incomes, newest entry first.
    pub recent_incomes: Vec<Transaction>,
    /// Last entered expenses, newest entry first.
    pub recent_expenses: Vec<Transaction>,
}

/// The single owner of the household's transactions.
///
/// Every view is recomputed from the current list on request.
pub struct Household {
    transactions: Vec<Transaction>,
    config: Config,
    clock: Box<dyn Clock>,
}

impl Household {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        Self {
            transactions: Vec::new(),
            config,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// A blank entry form for `kind`, dated today.
    pub fn draft(&self, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft::new(kind, &*self.clock)
    }

    pub fn record(&mut self, draft: TransactionDraft) -> Result<Uuid> {
        Ok(TransactionService::add(&mut self.transactions, draft)?)
    }

    pub fn add_income(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Uuid> {
        let draft = self
            .draft(TransactionKind::Income)
            .amount(amount)
            .category(category)
            .description(description)
            .on(date);
        self.record(draft)
    }

    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Uuid> {
        let draft = self
            .draft(TransactionKind::Expense)
            .amount(amount)
            .category(category)
            .description(description)
            .on(date);
        self.record(draft)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Transaction> {
        Ok(TransactionService::remove(&mut self.transactions, id)?)
    }

    pub fn incomes(&self) -> Vec<&Transaction> {
        TransactionService::list_kind(&self.transactions, TransactionKind::Income)
    }

    pub fn expenses(&self) -> Vec<&Transaction> {
        TransactionService::list_kind(&self.transactions, TransactionKind::Expense)
    }

    /// Month containing today.
    pub fn current_period(&self) -> Result<CalendarPeriod> {
        Ok(CalendarPeriod::containing(self.today())?)
    }

    pub fn calendar(&self, period: CalendarPeriod) -> Vec<CalendarCell> {
        debug!(%period, transactions = self.transactions.len(), "rendering calendar");
        CalendarService::month_view(period, &self.transactions, &*self.clock)
    }

    /// Calendar for a raw zero-based month; out-of-range months are rejected.
    pub fn calendar_for(&self, year: i32, month0: u32) -> Result<Vec<CalendarCell>> {
        let period = CalendarPeriod::from_parts(year, month0)?;
        Ok(self.calendar(period))
    }

    pub fn day_detail(&self, date_key: &str) -> DayDetail {
        CalendarService::transactions_on(&self.transactions, date_key)
    }

    pub fn weekly_summary(&self) -> Vec<WeekBucket> {
        TransactionAggregator::group_by_week(&self.transactions)
    }

    pub fn monthly_summary(&self) -> Vec<MonthBucket> {
        TransactionAggregator::group_by_month(&self.transactions, self.language())
    }

    pub fn overview(&self) -> Overview {
        let totals = TransactionAggregator::totals(&self.transactions);
        let balance = totals.net();
        let status = if balance >= 0.0 {
            BalanceStatus::Healthy
        } else {
            BalanceStatus::Overspending
        };
        Overview {
            totals,
            balance,
            status,
            recent_incomes: self.recent(TransactionKind::Income),
            recent_expenses: self.recent(TransactionKind::Expense),
        }
    }

    fn recent(&self, kind: TransactionKind) -> Vec<Transaction> {
        TransactionService::recent(&self.transactions, kind, self.config.recent_limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Display name of a category, falling back to the raw id for unknown ones.
    pub fn category_label(&self, kind: TransactionKind, id: &str) -> String {
        CategoryCatalog::lookup(kind, id)
            .map(|category| category.label(self.language()).to_string())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn category_icon(&self, kind: TransactionKind, id: &str) -> &'static str {
        CategoryCatalog::lookup(kind, id)
            .map(|category| category.icon)
            .unwrap_or_else(|| CategoryCatalog::fallback_icon(kind))
    }

    pub fn format_amount(&self, amount: f64) -> String {
        GroupedCurrency::new(self.config.currency_symbol.as_str()).format_amount(amount)
    }

    /// `d/m/yyyy - d/m/yyyy` for a week bucket.
    pub fn week_range_label(&self, week: &WeekBucket) -> String {
        format_range(&NumericDate, week.start_date, week.end_date)
    }

    /// `"{month name} {year}"` heading for a month bucket.
    pub fn month_heading(&self, month: &MonthBucket) -> String {
        format!("{} {}", month.month_name, month.year)
    }

    pub fn long_date(&self, date: NaiveDate) -> String {
        LongDate {
            language: self.language(),
        }
        .format_date(date)
    }

    pub fn weekday_headers(&self) -> [&'static str; 7] {
        self.language().weekday_labels()
    }
}

impl Default for Household {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_core::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn household() -> Household {
        Household::with_clock(Config::default(), FixedClock(date(2025, 6, 15)))
    }

    #[test]
    fn overview_tracks_balance_status() {
        let mut home = household();
        home.add_income("1000", "salary", "", date(2025, 6, 1)).unwrap();
        home.add_expense("300", "food", "", date(2025, 6, 2)).unwrap();
        let overview = home.overview();
        assert_eq!(overview.totals.income, 1000.0);
        assert_eq!(overview.totals.expense, 300.0);
        assert_eq!(overview.balance, 700.0);
        assert_eq!(overview.status, BalanceStatus::Healthy);

        home.add_expense("800", "housing", "rent", date(2025, 6, 3)).unwrap();
        assert_eq!(home.overview().status, BalanceStatus::Overspending);
    }

    #[test]
    fn recent_is_limited_by_config() {
        let mut home = Household::with_clock(
            Config {
                recent_limit: 2,
                ..Config::default()
            },
            FixedClock(date(2025, 6, 15)),
        );
        for day in 1..=4 {
            home.add_expense("10", "food", "", date(2025, 6, day)).unwrap();
        }
        home.add_income("500", "bonus", "", date(2025, 6, 9)).unwrap();
        home.add_expense("20", "housing", "", date(2025, 5, 1)).unwrap();

        let overview = home.overview();
        assert_eq!(overview.recent_incomes.len(), 1);
        assert_eq!(overview.recent_expenses.len(), 2);
        // Back-dated but entered last.
        assert_eq!(overview.recent_expenses[0].date(), date(2025, 5, 1));
        assert_eq!(overview.recent_expenses[1].date(), date(2025, 6, 4));
    }

    #[test]
    fn category_labels_fall_back_to_raw_id() {
        let home = household();
        assert_eq!(home.category_label(TransactionKind::Expense, "food"), "อาหาร");
        assert_eq!(home.category_label(TransactionKind::Expense, "pets"), "pets");
        assert_eq!(home.category_icon(TransactionKind::Income, "lottery"), "circle-dollar-sign");
    }

    #[test]
    fn draft_is_dated_today() {
        let home = household();
        assert_eq!(home.draft(TransactionKind::Income).date, date(2025, 6, 15));
        assert_eq!(home.current_period().unwrap().to_string(), "2025-06");
    }
}
