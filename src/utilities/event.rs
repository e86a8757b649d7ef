//! Event helpers
//!
//! Date formatting, demo time ranges, duration strings, temporal
//! classification, id-based replacement and list comparators.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Event, Identified};

use super::random::random_integer;

/// Bounds (minutes) for the random start offset from now
const MIN_RANDOM_DATE_FROM: f64 = -1500.0;
const MAX_RANDOM_DATE_FROM: f64 = 1500.0;

/// Bounds (minutes) for the random event length
const MIN_RANDOM_DATE_TO: f64 = 10.0;
const MAX_RANDOM_DATE_TO: f64 = 600.0;

const MINUTES_IN_HOUR: i64 = 60;
const HOURS_IN_DAY: i64 = 24;

/// Display patterns used across the itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `18/03/24 10:30`, used by the form inputs
    FullDate,
    /// `Mar 18`
    Day,
    /// `10:30`
    Time,
    /// `2024-03-18`
    Date,
}

impl DateFormat {
    /// strftime pattern
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::FullDate => "%d/%m/%y %H:%M",
            DateFormat::Day => "%b %d",
            DateFormat::Time => "%H:%M",
            DateFormat::Date => "%Y-%m-%d",
        }
    }

    /// Format a timestamp with this pattern
    pub fn format(&self, date: &DateTime<Utc>) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Format a timestamp with a strftime pattern.
///
/// # Errors
/// - `DomainError::InvalidDateFormat` if the pattern has unsupported specifiers
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> Result<String, DomainError> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(pattern))
        .map_err(|_| DomainError::InvalidDateFormat(pattern.to_string()))?;
    Ok(formatted)
}

/// Start and end of a generated event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

/// Random demo time range around `now`.
///
/// Start is `now` shifted by [-1500, 1500] minutes; the end follows the
/// start by [10, 600] minutes.
pub fn generate_random_time_range<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<TimeRange, DomainError> {
    let start_offset = random_integer(rng, MIN_RANDOM_DATE_FROM, MAX_RANDOM_DATE_FROM)?;
    let length = random_integer(rng, MIN_RANDOM_DATE_TO, MAX_RANDOM_DATE_TO)?;

    let date_from = now + Duration::minutes(start_offset);
    let date_to = date_from + Duration::minutes(length);

    Ok(TimeRange { date_from, date_to })
}

fn time_token(amount: i64, letter: char) -> String {
    format!("{amount:02}{letter} ")
}

/// Render the elapsed time between two timestamps, e.g. `01D 02H 30M `.
///
/// Leading zero units are skipped; once a larger unit is written the smaller
/// ones follow even when zero. Under one minute (or a negative span) yields an
/// empty string.
pub fn duration_to_string(date_from: &DateTime<Utc>, date_to: &DateTime<Utc>) -> String {
    let total = (*date_to - *date_from).num_minutes().max(0);
    let total_hours = total / MINUTES_IN_HOUR;

    let days = total_hours / HOURS_IN_DAY;
    let hours = total_hours % HOURS_IN_DAY;
    let minutes = total % MINUTES_IN_HOUR;

    let mut result = String::new();
    if days > 0 {
        result.push_str(&time_token(days, 'D'));
    }
    if days > 0 || hours > 0 {
        result.push_str(&time_token(hours, 'H'));
    }
    if total > 0 {
        result.push_str(&time_token(minutes, 'M'));
    }
    result
}

/// Event starts after `now`
pub fn is_future(event: &Event, now: DateTime<Utc>) -> bool {
    event.date_from > now
}

/// Event has started and not yet ended
pub fn is_present(event: &Event, now: DateTime<Utc>) -> bool {
    event.date_from <= now && event.date_to > now
}

/// Event has ended; a zero-length event at `now` counts as past
pub fn is_past(event: &Event, now: DateTime<Utc>) -> bool {
    event.date_to <= now
}

/// Copy of `items` with the element sharing `updated`'s id replaced.
pub fn replace_by_id<T>(items: &[T], updated: &T) -> Vec<T>
where
    T: Identified + Clone,
{
    items
        .iter()
        .map(|item| {
            if item.id() == updated.id() {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Most expensive first
pub fn sort_by_price(a: &Event, b: &Event) -> Ordering {
    b.base_price.cmp(&a.base_price)
}

/// Longest first
pub fn sort_by_duration(a: &Event, b: &Event) -> Ordering {
    b.duration_minutes().cmp(&a.duration_minutes())
}

/// Ascending by weekday of the start (Sunday = 0). The calendar date is
/// ignored, so Monday of next week sorts before Tuesday of this week.
pub fn sort_by_day(a: &Event, b: &Event) -> Ordering {
    let a_day = a.date_from.weekday().num_days_from_sunday();
    let b_day = b.date_from.weekday().num_days_from_sunday();
    a_day.cmp(&b_day)
}

/// Itinerary sort options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    #[default]
    Day,
    Time,
    Price,
}

impl SortType {
    /// Comparator for this sort
    pub fn comparator(&self) -> fn(&Event, &Event) -> Ordering {
        match self {
            SortType::Day => sort_by_day,
            SortType::Time => sort_by_duration,
            SortType::Price => sort_by_price,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Day => "day",
            SortType::Time => "time",
            SortType::Price => "price",
        }
    }
}

impl FromStr for SortType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(SortType::Day),
            "time" => Ok(SortType::Time),
            "price" => Ok(SortType::Price),
            _ => Err(DomainError::UnknownSortType(s.to_string())),
        }
    }
}

/// Stable in-place sort of events
pub fn sort_events(events: &mut [Event], sort_type: SortType) {
    events.sort_by(sort_type.comparator());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventType;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
    }

    fn event(date_from: DateTime<Utc>, date_to: DateTime<Utc>, base_price: i64) -> Event {
        Event {
            id: Uuid::new_v4(),
            date_from,
            date_to,
            base_price,
            event_type: EventType::Taxi,
            destination: "d1".to_string(),
            offers: BTreeSet::new(),
            is_favorite: false,
        }
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn test_format_date_patterns() {
        let date = at(18, 9, 5);
        assert_eq!(DateFormat::FullDate.format(&date), "18/03/24 09:05");
        assert_eq!(DateFormat::Day.format(&date), "Mar 18");
        assert_eq!(DateFormat::Time.format(&date), "09:05");
        assert_eq!(format_date(&date, "%Y-%m-%d").unwrap(), "2024-03-18");
    }

    #[test]
    fn test_format_date_invalid_pattern() {
        let result = format_date(&at(18, 9, 5), "%Q");
        assert!(matches!(result, Err(DomainError::InvalidDateFormat(_))));
    }

    // =========================================================================
    // Durations
    // =========================================================================

    #[test]
    fn test_duration_to_string_examples() {
        let start = at(18, 0, 0);
        assert_eq!(duration_to_string(&start, &start), "");
        assert_eq!(duration_to_string(&start, &(start + Duration::minutes(90))), "01H 30M ");
        assert_eq!(
            duration_to_string(&start, &(start + Duration::minutes(1500))),
            "01D 01H 00M "
        );
    }

    #[test]
    fn test_duration_to_string_minutes_only() {
        let start = at(18, 0, 0);
        assert_eq!(duration_to_string(&start, &(start + Duration::minutes(5))), "05M ");
        assert_eq!(duration_to_string(&start, &(start + Duration::minutes(60))), "01H 00M ");
    }

    #[test]
    fn test_duration_under_a_minute_is_empty() {
        let start = at(18, 0, 0);
        assert_eq!(duration_to_string(&start, &(start + Duration::seconds(59))), "");
    }

    #[test]
    fn test_duration_negative_is_empty() {
        assert_eq!(duration_to_string(&at(18, 1, 0), &at(18, 0, 0)), "");
    }

    #[test]
    fn test_duration_wide_values_not_truncated() {
        let start = at(1, 0, 0);
        let end = start + Duration::days(123) + Duration::minutes(7);
        assert_eq!(duration_to_string(&start, &end), "123D 00H 07M ");
    }

    // =========================================================================
    // Random ranges
    // =========================================================================

    #[test]
    fn test_generate_random_time_range_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = at(18, 12, 0);
        for _ in 0..500 {
            let range = generate_random_time_range(&mut rng, now).unwrap();
            let offset = (range.date_from - now).num_minutes();
            let length = (range.date_to - range.date_from).num_minutes();
            assert!((-1500..=1500).contains(&offset));
            assert!((10..=600).contains(&length));
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn test_classification_is_a_partition() {
        let e = event(at(18, 10, 0), at(18, 12, 0), 10);
        for now in [at(18, 9, 0), at(18, 10, 0), at(18, 11, 0), at(18, 12, 0), at(18, 13, 0)] {
            let flags = [is_future(&e, now), is_present(&e, now), is_past(&e, now)];
            assert_eq!(flags.iter().filter(|flag| **flag).count(), 1, "now = {now}");
        }
        assert!(is_future(&e, at(18, 9, 0)));
        assert!(is_present(&e, at(18, 10, 0)));
        assert!(is_past(&e, at(18, 12, 0)));
    }

    #[test]
    fn test_zero_width_event_is_past() {
        let now = at(18, 10, 0);
        let e = event(now, now, 10);
        assert!(!is_present(&e, now));
        assert!(!is_future(&e, now));
        assert!(is_past(&e, now));
    }

    // =========================================================================
    // Collections and sorting
    // =========================================================================

    #[test]
    fn test_replace_by_id() {
        let a = event(at(18, 10, 0), at(18, 11, 0), 10);
        let b = event(at(19, 10, 0), at(19, 11, 0), 20);
        let mut updated = b.clone();
        updated.base_price = 99;

        let result = replace_by_id(&[a.clone(), b.clone()], &updated);
        assert_eq!(result, vec![a.clone(), updated]);

        let stranger = event(at(20, 10, 0), at(20, 11, 0), 5);
        let unchanged = replace_by_id(&[a.clone(), b.clone()], &stranger);
        assert_eq!(unchanged, vec![a, b]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let mut events = vec![
            event(at(18, 0, 0), at(18, 1, 0), 10),
            event(at(18, 0, 0), at(18, 1, 0), 50),
            event(at(18, 0, 0), at(18, 1, 0), 30),
        ];
        sort_events(&mut events, SortType::Price);
        let prices: Vec<i64> = events.iter().map(|e| e.base_price).collect();
        assert_eq!(prices, vec![50, 30, 10]);
    }

    #[test]
    fn test_sort_by_duration_descending() {
        let mut events = vec![
            event(at(18, 0, 0), at(18, 0, 30), 1),
            event(at(18, 0, 0), at(18, 5, 0), 2),
            event(at(18, 0, 0), at(18, 2, 0), 3),
        ];
        sort_events(&mut events, SortType::Time);
        let prices: Vec<i64> = events.iter().map(|e| e.base_price).collect();
        assert_eq!(prices, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_day_ignores_calendar_date() {
        // 2024-03-18 and 2024-03-25 are both Mondays
        let monday = event(at(18, 10, 0), at(18, 11, 0), 1);
        let next_monday = event(at(25, 8, 0), at(25, 9, 0), 2);
        assert_eq!(sort_by_day(&monday, &next_monday), Ordering::Equal);

        // 2024-03-17 is a Sunday, sorts before Monday
        let sunday = event(at(17, 10, 0), at(17, 11, 0), 3);
        let tuesday = event(at(19, 10, 0), at(19, 11, 0), 4);
        let mut events = vec![tuesday, next_monday, sunday, monday];
        sort_events(&mut events, SortType::Day);
        let prices: Vec<i64> = events.iter().map(|e| e.base_price).collect();
        assert_eq!(prices, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_sort_type_from_str() {
        assert_eq!("Price".parse::<SortType>().unwrap(), SortType::Price);
        assert_eq!(SortType::default(), SortType::Day);
        assert!(matches!(
            "offers".parse::<SortType>(),
            Err(DomainError::UnknownSortType(_))
        ));
    }
}
