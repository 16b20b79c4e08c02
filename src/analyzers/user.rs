use super::types::{BirthYearStats, CategoryCounts, Optional, UserStats};
use super::utility::mode;
use crate::model::TripTable;

pub const USER_TYPES: &[&str] = &["Subscriber", "Customer"];
pub const GENDERS: &[&str] = &["Male", "Female"];

/// Counts values per category. Known categories come first and are always present.
pub fn count_categories<'a, I>(values: I, known: &[&str]) -> CategoryCounts
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: Vec<(String, usize)> = known.iter().map(|k| (k.to_string(), 0)).collect();
    let mut missing = 0;

    for value in values {
        let Some(value) = value else {
            missing += 1;
            continue;
        };
        match counts.iter_mut().find(|(name, _)| name == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }

    CategoryCounts { counts, missing }
}

/// Earliest, latest and modal year over the given values.
pub fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

/// User type counts, plus gender and birth year when the table carries them.
#[tracing::instrument(skip(table), fields(rows = table.len(), schema = ?table.schema))]
pub fn user_stats(table: &TripTable) -> UserStats {
    let rows = &table.rows;

    let user_types = (!rows.is_empty())
        .then(|| count_categories(rows.iter().map(|r| r.user_type.as_deref()), USER_TYPES));

    let gender = if !table.schema.has_gender {
        Optional::Unavailable
    } else if rows.is_empty() {
        Optional::NoData
    } else {
        Optional::Available(count_categories(
            rows.iter().map(|r| r.gender.as_deref()),
            GENDERS,
        ))
    };

    let birth_year = if !table.schema.has_birth_year {
        Optional::Unavailable
    } else {
        let years: Vec<i32> = rows.iter().filter_map(|r| r.birth_year).collect();
        match birth_year_stats(&years) {
            Some(stats) => Optional::Available(stats),
            None => Optional::NoData,
        }
    };

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}
