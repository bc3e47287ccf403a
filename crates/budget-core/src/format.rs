use budget_domain::{Language, MonthIndex};
use chrono::{Datelike, NaiveDate};

/// Offset between the Gregorian and Thai Buddhist calendar years.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Thousands separators, at most two fraction digits, symbol suffix: `1,234.5 ฿`.
#[derive(Debug, Clone)]
pub struct GroupedCurrency {
    pub symbol: String,
}

impl GroupedCurrency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl CurrencyFormatter for GroupedCurrency {
    fn format_amount(&self, amount: f64) -> String {
        let number = group_thousands(amount);
        if self.symbol.is_empty() {
            number
        } else {
            format!("{} {}", number, self.symbol)
        }
    }
}

fn group_thousands(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = amount < 0.0 && (whole != "0" || !fraction.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `d/m/yyyy`, used for week ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericDate;

impl DateFormatter for NumericDate {
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{}/{}/{}", date.day(), date.month(), date.year())
    }
}

/// Day, month name and year. Thai labels use the Buddhist era year.
#[derive(Debug, Clone, Copy)]
pub struct LongDate {
    pub language: Language,
}

impl DateFormatter for LongDate {
    fn format_date(&self, date: NaiveDate) -> String {
        let month = self.language.month_name(MonthIndex::of(date));
        match self.language {
            Language::Thai => {
                let year = date.year() + BUDDHIST_ERA_OFFSET;
                format!("{} {} {}", date.day(), month, year)
            }
            Language::English => format!("{} {}, {}", month, date.day(), date.year()),
        }
    }
}

/// Renders an inclusive range such as `1/6/2025 - 7/6/2025`.
pub fn format_range(formatter: &dyn DateFormatter, start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", formatter.format_date(start), formatter.format_date(end))
}
