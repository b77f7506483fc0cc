//! Calendar range calculation - which days a view renders.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How much of the calendar is rendered at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    Month,
}

impl ViewMode {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(DomainError::Validation(format!(
                "unknown view mode: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// Navigation direction for [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// The ordered, contiguous sequence of days the view covers.
///
/// Week view is the Monday-through-Sunday week containing `reference`
/// (weeks start on Monday). Month view is day 1 through the last day of
/// `reference`'s month.
pub fn days_in_view(reference: DateTime<Utc>, mode: ViewMode) -> Vec<NaiveDate> {
    let date = reference.date_naive();
    match mode {
        ViewMode::Week => {
            let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
            (0..7).map(|offset| monday + Duration::days(offset)).collect()
        }
        ViewMode::Month => {
            let mut days = Vec::with_capacity(31);
            let mut day = first_of_month(date);
            while day.month() == date.month() {
                days.push(day);
                day = match day.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
            days
        }
    }
}

/// Shift `reference` by exactly one unit of the view mode, preserving
/// time-of-day. Month arithmetic clamps the day when the target month is
/// shorter (Jan 31 -> Feb 28/29).
pub fn advance(reference: DateTime<Utc>, mode: ViewMode, direction: Direction) -> DateTime<Utc> {
    match (mode, direction) {
        (ViewMode::Week, Direction::Next) => reference + Duration::weeks(1),
        (ViewMode::Week, Direction::Prev) => reference - Duration::weeks(1),
        (ViewMode::Month, Direction::Next) => reference
            .checked_add_months(Months::new(1))
            .unwrap_or(reference),
        (ViewMode::Month, Direction::Prev) => reference
            .checked_sub_months(Months::new(1))
            .unwrap_or(reference),
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("day 1 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn week_view_is_monday_through_sunday() {
        // 2024-06-27 is a Thursday
        let days = days_in_view(at(2024, 6, 27, 12), ViewMode::Week);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6].weekday(), Weekday::Sun);
        assert!(days.contains(&NaiveDate::from_ymd_opt(2024, 6, 27).unwrap()));
    }

    #[test]
    fn week_view_spans_month_boundary() {
        // 2024-07-01 is a Monday; the week before contains June and July days
        let days = days_in_view(at(2024, 6, 30, 8), ViewMode::Week);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 6, 24).unwrap());
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn month_view_covers_whole_month() {
        let days = days_in_view(at(2024, 6, 15, 12), ViewMode::Month);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(days[29], NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn month_view_handles_leap_february() {
        let days = days_in_view(at(2024, 2, 10, 12), ViewMode::Month);
        assert_eq!(days.len(), 29);
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let days = days_in_view(at(2023, 2, 10, 12), ViewMode::Month);
        assert_eq!(days.len(), 28);
    }

    #[test]
    fn advance_week_preserves_time_of_day() {
        let reference = at(2024, 12, 30, 9);
        let next = advance(reference, ViewMode::Week, Direction::Next);
        assert_eq!(next, at(2025, 1, 6, 9));
        assert_eq!(next.hour(), 9);
    }

    #[test]
    fn advance_month_clamps_short_months() {
        let reference = at(2024, 1, 31, 9);
        let next = advance(reference, ViewMode::Month, Direction::Next);
        assert_eq!(next.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(next.hour(), 9);
    }

    #[test]
    fn advance_round_trips_into_same_period() {
        for mode in [ViewMode::Week, ViewMode::Month] {
            let reference = at(2024, 6, 27, 12);
            let there = advance(reference, mode, Direction::Next);
            let back = advance(there, mode, Direction::Prev);
            assert_eq!(
                days_in_view(back, mode),
                days_in_view(reference, mode)
            );
        }
    }
}
