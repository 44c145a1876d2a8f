//! Input validation shared by the registry and the inventory.
//!
//! The rules are the strictest ones the dealership screens ever applied: every field is required,
//! personal names are letters only, phones are digits only, brand and color carry no digits,
//! the release year is bounded and the price is a non-negative finite number.

use crate::errors::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Earliest accepted year of release.
pub const MIN_YEAR_OF_RELEASE: i32 = 1970;
/// Latest accepted year of release.
pub const MAX_YEAR_OF_RELEASE: i32 = 2024;

#[allow(clippy::expect_used)] // literal pattern
static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z]+$").expect("Invalid regex"));

#[allow(clippy::expect_used)] // literal pattern
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid regex"));

#[allow(clippy::expect_used)] // literal pattern
static NO_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\d]+$").expect("Invalid regex"));

/// Trims `value` and rejects it if nothing is left.
pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(trimmed)
}

/// Given or family name: Latin or Cyrillic letters only.
pub fn validate_person_name(field: &'static str, value: &str) -> Result<String> {
    let value = require_non_empty(field, value)?;
    if !PERSON_NAME_RE.is_match(value) {
        return Err(Error::validation(field, "must contain letters only"));
    }
    Ok(value.to_string())
}

/// Phone number: digits only, no separators.
pub fn validate_phone(value: &str) -> Result<String> {
    let value = require_non_empty("phone", value)?;
    if !DIGITS_RE.is_match(value) {
        return Err(Error::validation("phone", "must contain digits only"));
    }
    Ok(value.to_string())
}

/// Free text that must not contain digits (brand, color).
pub fn validate_no_digits(field: &'static str, value: &str) -> Result<String> {
    let value = require_non_empty(field, value)?;
    if !NO_DIGITS_RE.is_match(value) {
        return Err(Error::validation(field, "must not contain digits"));
    }
    Ok(value.to_string())
}

/// Year of release within [`MIN_YEAR_OF_RELEASE`]..=[`MAX_YEAR_OF_RELEASE`].
pub fn validate_year(year: i32) -> Result<i32> {
    if !(MIN_YEAR_OF_RELEASE..=MAX_YEAR_OF_RELEASE).contains(&year) {
        return Err(Error::validation(
            "year_of_release",
            format!("must be between {MIN_YEAR_OF_RELEASE} and {MAX_YEAR_OF_RELEASE}, got {year}"),
        ));
    }
    Ok(year)
}

/// Finite, non-negative price.
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::validation(
            "price",
            format!("must be a non-negative number, got {price}"),
        ));
    }
    Ok(price)
}

/// Parses a year typed by a user, then range-checks it.
pub fn parse_year(input: &str) -> Result<i32> {
    let input = require_non_empty("year_of_release", input)?;
    let year = input
        .parse::<i32>()
        .map_err(|e| Error::validation("year_of_release", format!("not an integer: {e}")))?;
    validate_year(year)
}

/// Parses a price typed by a user, then checks it is non-negative and finite.
pub fn parse_price(input: &str) -> Result<f64> {
    let input = require_non_empty("price", input)?;
    let price = input
        .parse::<f64>()
        .map_err(|e| Error::validation("price", format!("not a number: {e}")))?;
    validate_price(price)
}
