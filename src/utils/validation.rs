//! Input predicates applied at the HTTP boundary.
//!
//! Each check is a small pure function so handlers and DTO conversions can
//! reject bad input before any repository is touched.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::AppError;
use serde_json::json;

/// Largest ingredient amount accepted for a single recipe line.
pub const MAX_AMOUNT: i64 = i32::MAX as i64;

/// Cooking time bounds in minutes.
pub const MIN_COOKING_TIME: i64 = 1;
pub const MAX_COOKING_TIME: i64 = 5000;

/// Validates an ingredient amount and narrows it to the domain type.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless `1 <= amount <= MAX_AMOUNT`.
pub fn validate_amount(amount: i64) -> Result<u32, AppError> {
    if !(1..=MAX_AMOUNT).contains(&amount) {
        return Err(AppError::bad_request(
            "Amount must be a positive integer",
            json!({ "amount": amount, "max": MAX_AMOUNT }),
        ));
    }

    u32::try_from(amount).map_err(|_| {
        AppError::bad_request(
            "Amount must be a positive integer",
            json!({ "amount": amount }),
        )
    })
}

/// Validates cooking time in minutes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if outside `1..=5000`.
pub fn validate_cooking_time(minutes: i64) -> Result<i32, AppError> {
    if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&minutes) {
        return Err(AppError::bad_request(
            "Cooking time must be between 1 and 5000 minutes",
            json!({ "cooking_time": minutes }),
        ));
    }

    i32::try_from(minutes).map_err(|_| {
        AppError::bad_request(
            "Cooking time must be between 1 and 5000 minutes",
            json!({ "cooking_time": minutes }),
        )
    })
}

/// Returns the first value that appears more than once.
pub fn find_duplicate<T>(items: &[T]) -> Option<T>
where
    T: Hash + Eq + Copy,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().copied().find(|item| !seen.insert(*item))
}

/// Rejects lists containing the same id twice.
///
/// `field` names the offending request field in the error details.
pub fn validate_unique_ids(ids: &[i64], field: &'static str) -> Result<(), AppError> {
    match find_duplicate(ids) {
        Some(duplicate) => Err(AppError::bad_request(
            format!("Duplicate {field} are not allowed"),
            json!({ "field": field, "duplicate": duplicate }),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount_accepts_positive() {
        assert_eq!(validate_amount(1).unwrap(), 1);
        assert_eq!(validate_amount(500).unwrap(), 500);
        assert_eq!(validate_amount(MAX_AMOUNT).unwrap(), i32::MAX as u32);
    }

    #[test]
    fn test_validate_amount_rejects_zero_and_negative() {
        assert!(matches!(
            validate_amount(0),
            Err(AppError::Validation { .. })
        ));
        assert!(validate_amount(-5).is_err());
    }

    #[test]
    fn test_validate_amount_rejects_too_large() {
        assert!(validate_amount(MAX_AMOUNT + 1).is_err());
    }

    #[test]
    fn test_validate_cooking_time_bounds() {
        assert_eq!(validate_cooking_time(1).unwrap(), 1);
        assert_eq!(validate_cooking_time(5000).unwrap(), 5000);
        assert!(validate_cooking_time(0).is_err());
        assert!(validate_cooking_time(5001).is_err());
    }

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate(&[1, 2, 3]), None);
        assert_eq!(find_duplicate(&[1, 2, 1, 2]), Some(1));
        assert_eq!(find_duplicate::<i64>(&[]), None);
    }

    #[test]
    fn test_validate_unique_ids_message() {
        let err = validate_unique_ids(&[4, 4], "tags").unwrap_err();
        assert!(err.to_string().contains("Duplicate tags"));
    }
}
