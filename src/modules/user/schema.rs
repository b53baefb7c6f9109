use std::collections::BTreeSet;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: u64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<u64>,
}
