//! Domain models for household income and expense records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single dated, typed, amounted budget record.
///
/// Records are immutable once created; the household replaces or removes
/// them but never edits one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    amount: String,
    category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    date: NaiveDate,
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: amount.into(),
            category: category.into(),
            description: None,
            date,
            kind,
        }
    }

    pub fn income(amount: impl Into<String>, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, category, date)
    }

    pub fn expense(
        amount: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionKind::Expense, amount, category, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// Raw amount text as it was entered.
    pub fn raw_amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_key(&self) -> DateKey {
        DateKey::from_date(self.date)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Amount with the kind's sign applied: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Transaction {
    /// Parsed magnitude; unparseable text counts as zero.
    fn amount(&self) -> f64 {
        amount_or_zero(&self.amount)
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} {} [{}]", self.date_key(), self.kind, self.amount, self.category)
    }
}

/// Whether a record adds to or draws from the household balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Income => 1.0,
            TransactionKind::Expense => -1.0,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}
