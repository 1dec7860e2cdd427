//! Registration growth: cumulative number of users per calendar date.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::UserRecord;

/// Total registered users at the end of `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    pub total: usize,
}

/// Groups records by the date part of `joined_at` and returns running totals in ascending date
/// order. Dates with no registrations are not emitted.
pub fn cumulative_growth<'a, I>(records: I) -> Vec<GrowthPoint>
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *per_day.entry(record.joined_at.date()).or_insert(0) += 1;
    }

    let mut total = 0;
    per_day
        .into_iter()
        .map(|(date, count)| {
            total += count;
            GrowthPoint { date, total }
        })
        .collect()
}
