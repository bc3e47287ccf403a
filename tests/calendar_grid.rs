use chrono::Datelike;
use family_budget::domain::{CalendarDay, CalendarError, CalendarPeriod, Language, GRID_CELLS};
use family_budget::services::CalendarGridBuilder;
use regex::Regex;

fn render_row(row: &[CalendarDay]) -> String {
    row.iter()
        .map(|day| {
            if day.current_month {
                day.date.day().to_string()
            } else {
                format!("({})", day.date.day())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn date_keys_are_canonical_for_a_decade() {
    let key_format = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    for year in 2020..=2030 {
        for month0 in 0..12 {
            let grid = CalendarGridBuilder::build_for(year, month0).unwrap();
            assert_eq!(grid.days().len(), GRID_CELLS);
            for day in grid.days() {
                assert!(key_format.is_match(day.date_key.as_str()), "{}", day.date_key);
                assert_eq!(day.date_key.to_date(), Some(day.date));
            }
        }
    }
}

#[test]
fn filler_keys_carry_their_own_month_and_year() {
    // March 2025 starts on a Saturday: six February days lead the grid.
    let grid = CalendarGridBuilder::build_for(2025, 2).unwrap();
    assert_eq!(grid.days()[0].date_key, "2025-02-23");
    assert_eq!(grid.days()[5].date_key, "2025-02-28");
    assert_eq!(grid.days()[6].date_key, "2025-03-01");
    assert_eq!(grid.days()[41].date_key, "2025-04-05");

    let january = CalendarGridBuilder::build_for(2026, 0).unwrap();
    assert_eq!(january.days()[0].date_key, "2025-12-28");
}

#[test]
fn february_2026_fills_exactly_four_rows() {
    let grid = CalendarGridBuilder::build_for(2026, 1).unwrap();
    let rows: Vec<&[CalendarDay]> = grid.weeks().collect();
    insta::assert_snapshot!(render_row(rows[0]), @"1 2 3 4 5 6 7");
    insta::assert_snapshot!(render_row(rows[3]), @"22 23 24 25 26 27 28");
    insta::assert_snapshot!(render_row(rows[4]), @"(1) (2) (3) (4) (5) (6) (7)");
    assert_eq!(grid.current_month_days().len(), 28);
}

#[test]
fn headers_match_grid_columns() {
    insta::assert_snapshot!(Language::Thai.weekday_labels().join(" "), @"อา จ อ พ พฤ ศ ส");
    let grid = CalendarGridBuilder::build_for(2025, 5).unwrap();
    assert_eq!(grid.days()[0].date.weekday(), chrono::Weekday::Sun);
}

#[test]
fn invalid_month_fails_fast() {
    assert_eq!(
        CalendarPeriod::from_parts(2025, 12).unwrap_err(),
        CalendarError::InvalidMonth(12)
    );
    assert!(CalendarGridBuilder::build_for(2025, u32::MAX).is_err());
}
