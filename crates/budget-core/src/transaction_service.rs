use budget_domain::{parse_amount, Displayable, Identifiable, Transaction, TransactionKind};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::time::Clock;
use crate::CoreError;

/// Form input for a new record, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Empty draft dated today, as a fresh entry form starts out.
    pub fn new(kind: TransactionKind, clock: &dyn Clock) -> Self {
        Self {
            kind,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: clock.today(),
        }
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.amount.trim().is_empty() {
            return Err(CoreError::Validation("amount is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(CoreError::Validation("category is required".into()));
        }
        if let Some(value) = parse_amount(&self.amount) {
            if value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "amount must not be negative: {}",
                    self.amount.trim()
                )));
            }
        }
        Ok(())
    }

    fn into_transaction(self) -> Transaction {
        Transaction::new(self.kind, self.amount.trim(), self.category, self.date)
            .with_description(self.description)
    }
}

/// Mutations on the household's transaction list.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft and appends it, returning the new record's id.
    pub fn add(book: &mut Vec<Transaction>, draft: TransactionDraft) -> Result<Uuid, CoreError> {
        draft.validate()?;
        let transaction = draft.into_transaction();
        let id = transaction.id();
        info!(%id, entry = %transaction.display_label(), "recorded transaction");
        book.push(transaction);
        Ok(id)
    }

    pub fn remove(book: &mut Vec<Transaction>, id: Uuid) -> Result<Transaction, CoreError> {
        let index = book
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        info!(%id, "removed transaction");
        Ok(book.remove(index))
    }

    pub fn find(book: &[Transaction], id: Uuid) -> Option<&Transaction> {
        book.iter().find(|txn| txn.id() == id)
    }

    /// Records of one kind, in insertion order.
    pub fn list_kind(book: &[Transaction], kind: TransactionKind) -> Vec<&Transaction> {
        book.iter().filter(|txn| txn.kind() == kind).collect()
    }

    /// The last `limit` records of `kind` to be entered, newest entry first.
    ///
    /// Ordering follows entry, not the record's date: a back-dated record
    /// entered just now still heads the list.
    pub fn recent(book: &[Transaction], kind: TransactionKind, limit: usize) -> Vec<&Transaction> {
        book.iter()
            .rev()
            .filter(|txn| txn.kind() == kind)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    #[test]
    fn draft_defaults_to_today() {
        let draft = TransactionDraft::new(TransactionKind::Income, &clock());
        assert_eq!(draft.date, clock().0);
        assert!(draft.amount.is_empty());
    }

    #[test]
    fn add_requires_amount_and_category() {
        let mut book = Vec::new();
        let missing_amount = TransactionDraft::new(TransactionKind::Expense, &clock()).category("food");
        let err = TransactionService::add(&mut book, missing_amount).unwrap_err();
        assert!(err.to_string().contains("amount is required"));

        let missing_category = TransactionDraft::new(TransactionKind::Expense, &clock()).amount("10");
        let err = TransactionService::add(&mut book, missing_category).unwrap_err();
        assert!(err.to_string().contains("category is required"));
        assert!(book.is_empty());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut book = Vec::new();
        let draft = TransactionDraft::new(TransactionKind::Expense, &clock())
            .amount("-5")
            .category("food");
        assert!(matches!(
            TransactionService::add(&mut book, draft),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn add_and_remove_round_trip() {
        let mut book = Vec::new();
        let draft = TransactionDraft::new(TransactionKind::Income, &clock())
            .amount(" 1500 ")
            .category("salary")
            .description("June pay");
        let id = TransactionService::add(&mut book, draft).expect("add");
        let stored = TransactionService::find(&book, id).expect("stored");
        assert_eq!(stored.raw_amount(), "1500");
        assert_eq!(stored.description(), Some("June pay"));

        let removed = TransactionService::remove(&mut book, id).expect("remove");
        assert_eq!(removed.id(), id);
        assert!(book.is_empty());
        assert!(matches!(
            TransactionService::remove(&mut book, id),
            Err(CoreError::TransactionNotFound(missing)) if missing == id
        ));
    }

    fn enter(book: &mut Vec<Transaction>, kind: TransactionKind, amount: &str, day: u32) {
        let draft = TransactionDraft::new(kind, &clock())
            .amount(amount)
            .category("other")
            .on(NaiveDate::from_ymd_opt(2025, 6, day).unwrap());
        TransactionService::add(book, draft).unwrap();
    }

    fn amounts(records: Vec<&Transaction>) -> Vec<&str> {
        records.into_iter().map(Transaction::raw_amount).collect()
    }

    #[test]
    fn recent_follows_entry_order_per_kind() {
        let mut book = Vec::new();
        enter(&mut book, TransactionKind::Income, "1", 20);
        for day in 1..=6 {
            enter(&mut book, TransactionKind::Expense, &day.to_string(), day);
        }
        // Entered last but dated before most of the book.
        enter(&mut book, TransactionKind::Income, "2", 2);

        assert_eq!(
            amounts(TransactionService::recent(&book, TransactionKind::Income, 5)),
            ["2", "1"]
        );
        assert_eq!(
            amounts(TransactionService::recent(&book, TransactionKind::Expense, 5)),
            ["6", "5", "4", "3", "2"]
        );
        assert!(TransactionService::recent(&book, TransactionKind::Expense, 0).is_empty());
        assert_eq!(TransactionService::list_kind(&book, TransactionKind::Income).len(), 2);
    }
}
