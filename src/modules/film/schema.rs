use std::collections::BTreeSet;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct FilmEntity {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Minutes.
    pub duration: i64,
    pub likes: BTreeSet<u64>,
}
