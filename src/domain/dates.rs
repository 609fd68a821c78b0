//! Conversion between ordinal day counts and ISO-8601 date strings
//!
//! Ordinals count days in the proleptic Gregorian calendar with
//! 0001-01-01 as day 1. Only four-digit years are supported, so valid
//! ordinals run from 1 (0001-01-01) to 3652059 (9999-12-31).

use crate::error::{ProvenanceError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// First supported ordinal (0001-01-01)
pub const MIN_ORDINAL: i64 = 1;
/// Last supported ordinal (9999-12-31)
pub const MAX_ORDINAL: i64 = 3_652_059;

fn iso_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap())
}

/// Convert an ordinal day count to a `YYYY-MM-DD` string
pub fn date_to_str(ordinal: i64) -> Result<String> {
    if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
        return Err(ProvenanceError::InvalidDate(ordinal.to_string()));
    }

    i32::try_from(ordinal)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| ProvenanceError::InvalidDate(ordinal.to_string()))
}

/// Convert a `YYYY-MM-DD` string to an ordinal day count
pub fn str_to_date(date: &str) -> Result<i64> {
    let invalid = || ProvenanceError::InvalidDate(date.to_string());

    let captures = iso_date_regex().captures(date).ok_or_else(invalid)?;
    let year: i32 = captures[1].parse().map_err(|_| invalid())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid())?;
    let day: u32 = captures[3].parse().map_err(|_| invalid())?;

    // chrono accepts year 0, ordinals do not
    if year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| i64::from(date.num_days_from_ce()))
        .ok_or_else(invalid)
}

/// Convert a column of ordinals, failing on the first invalid entry
pub fn dates_to_str(ordinals: &[i64]) -> Result<Vec<String>> {
    ordinals.iter().map(|&ordinal| date_to_str(ordinal)).collect()
}

/// Convert a column of ISO date strings, failing on the first invalid entry
pub fn strs_to_date<S: AsRef<str>>(dates: &[S]) -> Result<Vec<i64>> {
    dates.iter().map(|date| str_to_date(date.as_ref())).collect()
}
