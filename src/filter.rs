//! Filter selection: which city to load and which month/day to keep.
//!
//! Every selection can be parsed from its name (case-insensitive) or from the
//! number shown next to it in the interactive menu.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::Serialize;
use thiserror::Error;

/// Returned when a city, month or day selection cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown city: {0}")]
    City(String),

    #[error("unknown month: {0} (data covers January to June)")]
    Month(String),

    #[error("unknown day of week: {0}")]
    Day(String),
}

/// The supported cities, each backed by one CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name, as typed at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip table inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(n) = input.parse::<usize>() {
            return match n {
                1..=3 => Ok(City::ALL[n - 1]),
                _ => Err(SelectionError::City(input.to_string())),
            };
        }

        City::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(input))
            .ok_or_else(|| SelectionError::City(input.to_string()))
    }
}

/// Months covered by the source tables, in menu order.
pub const AVAILABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in menu order (Monday first).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name ("Monday"), the vocabulary used by the filters
/// and by the time statistics.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name of a timestamp ("January").
pub fn month_name_of(ts: &NaiveDateTime) -> &'static str {
    // month() is always 1..=12
    Month::try_from(ts.month() as u8)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Full English weekday name of a timestamp.
pub fn weekday_name_of(ts: &NaiveDateTime) -> &'static str {
    weekday_name(ts.weekday())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// True when `ts` falls in the selected month (always true for `All`).
    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => month_name_of(ts).eq_ignore_ascii_case(month.name()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(n) = input.parse::<usize>() {
            return match n {
                0 => Ok(MonthFilter::All),
                1..=6 => Ok(MonthFilter::Only(AVAILABLE_MONTHS[n - 1])),
                _ => Err(SelectionError::Month(input.to_string())),
            };
        }

        if input.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }

        AVAILABLE_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(input))
            .map(MonthFilter::Only)
            .ok_or_else(|| SelectionError::Month(input.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// True when `ts` falls on the selected weekday (always true for `All`).
    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => weekday_name_of(ts).eq_ignore_ascii_case(weekday_name(*day)),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DayFilter::All)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(n) = input.parse::<usize>() {
            return match n {
                0 => Ok(DayFilter::All),
                1..=7 => Ok(DayFilter::Only(WEEKDAYS[n - 1])),
                _ => Err(SelectionError::Day(input.to_string())),
            };
        }

        if input.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }

        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(input))
            .map(DayFilter::Only)
            .ok_or_else(|| SelectionError::Day(input.to_string()))
    }
}

/// One session's choice of city, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection for a whole city with no month or day restriction.
    pub fn whole_city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }

    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        self.month.matches(ts) && self.day.matches(ts)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, filtered by month {} and day of week {}",
            self.city, self.month, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_city_from_name_and_number() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("new York city ".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("3".parse::<City>().unwrap(), City::Washington);
        assert_eq!(
            "0".parse::<City>(),
            Err(SelectionError::City("0".to_string()))
        );
        assert!("boston".parse::<City>().is_err());
    }

    #[test]
    fn test_month_from_name_and_number() {
        assert_eq!("0".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "6".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::June)
        );
        assert_eq!(
            "february".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::February)
        );
        assert!("7".parse::<MonthFilter>().is_err());
        assert!("july".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_day_from_name_and_number() {
        assert_eq!("0".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "1".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Mon)
        );
        assert_eq!(
            "Sunday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Sun)
        );
        assert!("8".parse::<DayFilter>().is_err());
        assert!("funday".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_filters_match_timestamps() {
        // 2017-01-02 was a Monday
        let monday_jan = ts(2017, 1, 2, 8);
        let tuesday_feb = ts(2017, 2, 7, 17);

        let jan = MonthFilter::Only(Month::January);
        assert!(jan.matches(&monday_jan));
        assert!(!jan.matches(&tuesday_feb));

        let monday = DayFilter::Only(Weekday::Mon);
        assert!(monday.matches(&monday_jan));
        assert!(!monday.matches(&tuesday_feb));

        assert!(MonthFilter::All.matches(&tuesday_feb));
        assert!(DayFilter::All.matches(&tuesday_feb));
    }

    #[test]
    fn test_selection_display() {
        let selection = FilterSelection::new(
            City::Chicago,
            MonthFilter::Only(Month::March),
            DayFilter::All,
        );
        assert_eq!(
            selection.to_string(),
            "Chicago, filtered by month March and day of week All"
        );
    }

    #[test]
    fn test_names_of_timestamp() {
        let t = ts(2017, 6, 4, 0);
        assert_eq!(month_name_of(&t), "June");
        assert_eq!(weekday_name_of(&t), "Sunday");
    }
}
