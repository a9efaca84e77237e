// Calendar date conversion between chrono (domain) and time (clickhouse
// column serde)

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

pub fn naive_to_date(date: NaiveDate) -> Result<time::Date> {
    let month = time::Month::try_from(date.month() as u8)?;
    Ok(time::Date::from_calendar_date(date.year(), month, date.day() as u8)?)
}

pub fn date_to_naive(date: time::Date) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()) as u32, u32::from(date.day()))
        .ok_or_else(|| anyhow!("calendar date out of range: {}", date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_dates_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        let converted = naive_to_date(naive).expect("convert");
        assert_eq!(date_to_naive(converted).expect("convert back"), naive);
    }
}
