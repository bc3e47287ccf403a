//! Fixed income and expense category sets with their display metadata.

use serde::Serialize;

use crate::locale::Language;
use crate::transaction::TransactionKind;

/// Display metadata for one built-in category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub thai: &'static str,
    pub english: &'static str,
    /// Icon reference understood by the presentation layer.
    pub icon: &'static str,
}

impl CategoryInfo {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Thai => self.thai,
            Language::English => self.english,
        }
    }
}

const fn info(
    id: &'static str,
    thai: &'static str,
    english: &'static str,
    icon: &'static str,
) -> CategoryInfo {
    CategoryInfo {
        id,
        thai,
        english,
        icon,
    }
}

pub const INCOME_CATEGORIES: [CategoryInfo; 4] = [
    info("salary", "เงินเดือน", "Salary", "circle-dollar-sign"),
    info("bonus", "โบนัส", "Bonus", "wallet"),
    info("investment", "เงินลงทุน", "Investment", "line-chart"),
    info("other", "อื่นๆ", "Other", "pie-chart"),
];

pub const EXPENSE_CATEGORIES: [CategoryInfo; 9] = [
    info("food", "อาหาร", "Food", "pie-chart"),
    info("housing", "ที่พักอาศัย", "Housing", "home"),
    info("utilities", "สาธารณูปโภค", "Utilities", "bar-chart-3"),
    info("transportation", "การเดินทาง", "Transportation", "credit-card"),
    info("education", "การศึกษา", "Education", "pie-chart"),
    info("healthcare", "การดูแลสุขภาพ", "Healthcare", "pie-chart"),
    info("entertainment", "ความบันเทิง", "Entertainment", "pie-chart"),
    info("shopping", "ช้อปปิ้ง", "Shopping", "pie-chart"),
    info("other", "อื่นๆ", "Other", "pie-chart"),
];

/// Lookup over the built-in category sets.
pub struct CategoryCatalog;

impl CategoryCatalog {
    /// Categories offered for the given kind, in display order.
    pub fn for_kind(kind: TransactionKind) -> &'static [CategoryInfo] {
        match kind {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Returns `None` when `id` is not part of the kind's fixed set.
    pub fn lookup(kind: TransactionKind, id: &str) -> Option<&'static CategoryInfo> {
        Self::for_kind(kind).iter().find(|category| category.id == id)
    }

    /// Icon used when a record's category is not in the fixed set.
    pub fn fallback_icon(kind: TransactionKind) -> &'static str {
        match kind {
            TransactionKind::Income => "circle-dollar-sign",
            TransactionKind::Expense => "credit-card",
        }
    }
}
