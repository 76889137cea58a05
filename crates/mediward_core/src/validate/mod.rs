//! Field validation predicates for operator input.
//!
//! # Responsibility
//! - Check one raw text field against one domain rule.
//! - Keep every check pure; only `is_future_or_today` reads the wall clock.
//!
//! # Invariants
//! - A field accepted here is safe to hand to a repository unchanged.
//! - Validation failures never reach storage; callers re-prompt instead.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

// Date shape is checked by regex before chrono parsing because chrono's
// %m/%d specifiers also accept single-digit fields ("2024-1-1").
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern must compile"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern must compile"));

// Conservative email shape: one @, non-empty local part, dotted domain with
// a final segment of at least two word characters. Not RFC 5321.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)*\.\w{2,}$").expect("email pattern must compile"));

/// Returns whether the trimmed input is non-empty.
pub fn required(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Parses an exact `YYYY-MM-DD` string into a calendar date.
///
/// Returns `None` for wrong shapes and for impossible dates (month 13,
/// February 30 and similar).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Returns whether the input is an exact `YYYY-MM-DD` real calendar date.
pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Returns whether the input is a valid date on or after today.
///
/// "Today" is the local wall-clock date at the moment of the call.
pub fn is_future_or_today(text: &str) -> bool {
    match parse_date(text) {
        Some(date) => date >= Local::now().date_naive(),
        None => false,
    }
}

/// Returns whether the input is a phone number: an optional leading `+`
/// followed by 7 to 15 digits and nothing else.
pub fn is_valid_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

/// Returns whether the input passes the conservative email shape check.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Title-cases each whitespace-separated word (`male` -> `Male`).
///
/// Used to normalize operator input before enumeration matching, so
/// `pending` and `PENDING` both resolve to the stored `Pending` value.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{
        is_future_or_today, is_valid_date, is_valid_email, is_valid_phone, parse_date, required,
        title_case,
    };
    use chrono::{Datelike, Local};

    #[test]
    fn required_rejects_blank_input() {
        assert!(!required(""));
        assert!(!required("   "));
        assert!(!required("\t\n"));
        assert!(required("x"));
        assert!(required("  Jane  "));
    }

    #[test]
    fn valid_dates_parse() {
        assert!(is_valid_date("1990-05-01"));
        assert!(is_valid_date("2000-02-29"));
        assert_eq!(
            parse_date("2024-12-31").map(|d| (d.year(), d.month(), d.day())),
            Some((2024, 12, 31))
        );
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2023-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024/01/01"));
        assert!(!is_valid_date("2024-1-1"));
        assert!(!is_valid_date("24-01-01"));
        assert!(!is_valid_date("2024-01-01 "));
        assert!(!is_valid_date("not a date"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn future_or_today_accepts_today_and_later() {
        let today = Local::now().date_naive();
        assert!(is_future_or_today(&today.format("%Y-%m-%d").to_string()));
        assert!(is_future_or_today("2099-01-01"));
        assert!(!is_future_or_today("1999-01-01"));
        assert!(!is_future_or_today("2099-13-01"));
    }

    #[test]
    fn phone_accepts_seven_to_fifteen_digits_with_optional_plus() {
        assert!(is_valid_phone("5551234"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("+15551234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("55512+34"));
        assert!(!is_valid_phone("++5551234"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+tag@mail.example.co"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane@example.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn title_case_normalizes_words() {
        assert_eq!(title_case("male"), "Male");
        assert_eq!(title_case("PENDING"), "Pending");
        assert_eq!(title_case("jane doe"), "Jane Doe");
        assert_eq!(title_case(""), "");
    }
}
