use chrono::{Datelike, NaiveDate};

/// Month-to-date billing window: the first calendar day of the reference
/// date's month through the reference date itself, both inclusive.
pub fn month_to_date_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
        .expect("first of an existing month is always valid");
    (start, reference)
}
