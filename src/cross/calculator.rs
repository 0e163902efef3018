// src/cross/calculator.rs
//! The cross arithmetic.
//!
//! `m = n - 6` is split into a base `q = floor(m / 3)` and remainder `r`.
//! Five consecutive values starting at `q` are laid out, and the trailing
//! `r` (plus one when `r == 1`) of them are bumped by one:
//!
//! | r | adjustment |
//! |---|------------|
//! | 0 | none |
//! | 1 | `v3`, `v4` |
//! | 2 | `v2`, `v3`, `v4` |
//!
//! The category then decides which cell each value goes to.

use super::definitions::{Category, CrossResult};
use super::error::ValidationError;
use super::numerals::digit_value;

/// Smallest accepted input; keeps the base value `q` at 1 or more.
pub const MIN_INPUT: i64 = 9;

const OFFSET: i64 = 6;

/// Computes the cross for `n` laid out for `category`.
///
/// # Examples
/// ```ignore
/// let cross = compute(11, Category::Khaki)?;
/// assert_eq!((cross.bottom, cross.right, cross.center, cross.left, cross.top), (1, 2, 4, 5, 6));
/// ```
pub fn compute(n: i64, category: Category) -> Result<CrossResult, ValidationError> {
    if n < MIN_INPUT {
        return Err(ValidationError::BelowMinimum(n));
    }
    Ok(CrossResult::from_ordered(n, category, adjusted_values(n)))
}

/// Parses then computes. Used by every text entry point.
pub fn compute_from_text(text: &str, category: Category) -> Result<CrossResult, ValidationError> {
    compute(parse_input(text)?, category)
}

fn adjusted_values(n: i64) -> [i64; 5] {
    let m = n - OFFSET;
    let q = m.div_euclid(3);
    let r = m.rem_euclid(3);

    let mut values = [q, q + 1, q + 2, q + 3, q + 4];
    let bumped_from = match r {
        0 => values.len(),
        1 => 3,
        _ => 2,
    };
    for v in &mut values[bumped_from..] {
        *v += 1;
    }
    values
}

/// Parses user text into a number of at least [`MIN_INPUT`].
///
/// Accepts an optional sign followed by ASCII or Urdu digits, with surrounding
/// whitespace ignored. Anything else (decimals, trailing letters, overflow) is
/// rejected as non-numeric.
pub fn parse_input(text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let not_a_number = || ValidationError::NotANumber(trimmed.to_string());

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() {
        return Err(not_a_number());
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        let d = digit_value(c).ok_or_else(not_a_number)?;
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(d as i64)
                } else {
                    v.checked_add(d as i64)
                }
            })
            .ok_or_else(not_a_number)?;
    }

    if value < MIN_INPUT {
        return Err(ValidationError::BelowMinimum(value));
    }
    Ok(value)
}
