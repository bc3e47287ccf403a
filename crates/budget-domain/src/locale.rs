//! Month and weekday label tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::MonthIndex;

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Sunday first, matching the calendar grid columns.
const THAI_WEEKDAYS: [&str; 7] = ["อา", "จ", "อ", "พ", "พฤ", "ศ", "ส"];
const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Language of the fixed label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Thai,
    English,
}

impl Language {
    /// Picks the label language for a locale tag such as `th-TH` or `en_US`.
    ///
    /// Anything that is not English falls back to Thai.
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Language::English,
            _ => Language::Thai,
        }
    }

    pub fn month_name(self, month: MonthIndex) -> &'static str {
        let table = match self {
            Language::Thai => &THAI_MONTHS,
            Language::English => &ENGLISH_MONTHS,
        };
        table[month.zero_based() as usize]
    }

    /// Short weekday headers, Sunday first.
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Language::Thai => THAI_WEEKDAYS,
            Language::English => ENGLISH_WEEKDAYS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Language::Thai => "thai",
            Language::English => "english",
        };
        f.write_str(label)
    }
}
