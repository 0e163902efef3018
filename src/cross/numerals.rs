// src/cross/numerals.rs
//! Digit-script rendering for cross values. Purely a formatting step over
//! [`CrossResult`]; the calculator never sees it.

use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::definitions::{CrossResult, Position};
use super::error::CrossError;

const URDU_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralScript {
    Western,
    #[default]
    Urdu,
}

impl NumeralScript {
    pub const ALL: [NumeralScript; 2] = [NumeralScript::Western, NumeralScript::Urdu];

    pub fn as_str(self) -> &'static str {
        match self {
            NumeralScript::Western => "western",
            NumeralScript::Urdu => "urdu",
        }
    }

    fn glyph(self, digit: u32) -> Option<char> {
        match self {
            NumeralScript::Western => char::from_digit(digit, 10),
            NumeralScript::Urdu => URDU_DIGITS.get(digit as usize).copied(),
        }
    }
}

impl fmt::Display for NumeralScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumeralScript {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        NumeralScript::ALL
            .into_iter()
            .find(|script| script.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CrossError::UnknownScript(tag.to_string()))
    }
}

/// Value of an ASCII or Urdu digit.
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10)
        .or_else(|| URDU_DIGITS.iter().position(|d| *d == c).map(|i| i as u32))
}

fn map_digits(text: &str, script: NumeralScript) -> String {
    text.chars()
        .map(|c| match digit_value(c) {
            Some(d) => script.glyph(d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Renders an integer in `script`. Signs pass through untouched.
pub fn render_value(value: i64, script: NumeralScript) -> String {
    map_digits(&value.to_string(), script)
}

/// Optional sign followed by ASCII or Urdu digits.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| digit_value(c).is_some())
}

/// Renders already-formatted text, such as the number as the user typed it.
/// Text that is not an integer is returned as is.
pub fn render_text(text: &str, script: NumeralScript) -> String {
    if !is_integer_text(text.trim()) {
        warn!("Invalid number for {} numeral conversion: {:?}", script, text);
        return text.to_string();
    }
    map_digits(text, script)
}

/// Rendered cell text for every position, in [`Position::ALL`] order.
pub fn render_result(result: &CrossResult, script: NumeralScript) -> [(Position, String); 5] {
    Position::ALL.map(|p| (p, render_value(result.get(p), script)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::calculator::{compute, parse_input};
    use crate::cross::definitions::Category;

    #[test]
    fn urdu_rendering_maps_every_digit() {
        assert_eq!(render_value(1_234_567_890, NumeralScript::Urdu), "۱۲۳۴۵۶۷۸۹۰");
        assert_eq!(render_value(42, NumeralScript::Western), "42");
    }

    #[test]
    fn minus_sign_passes_through() {
        assert_eq!(render_value(-35, NumeralScript::Urdu), "-۳۵");
    }

    #[test]
    fn non_numeric_text_is_returned_unchanged() {
        assert_eq!(render_text("n/a", NumeralScript::Urdu), "n/a");
        assert_eq!(render_text("12", NumeralScript::Urdu), "۱۲");
        assert_eq!(render_text("1.5", NumeralScript::Urdu), "1.5");
    }

    #[test]
    fn typed_text_converts_between_scripts() {
        assert_eq!(render_text("۱۱", NumeralScript::Western), "11");
        assert_eq!(render_text("۱1", NumeralScript::Urdu), "۱۱");
        assert_eq!(render_text("+12", NumeralScript::Urdu), "+۱۲");
    }

    #[test]
    fn urdu_rendering_round_trips() {
        for n in (0..5_000).chain([i64::MAX]) {
            let rendered = render_value(n, NumeralScript::Urdu);
            assert!(rendered.chars().all(|c| !c.is_ascii_digit()));
            let recovered = rendered
                .chars()
                .try_fold(0i64, |acc, c| Some(acc * 10 + digit_value(c)? as i64));
            assert_eq!(recovered, Some(n));
        }
        assert_eq!(parse_input(&render_value(123, NumeralScript::Urdu)), Ok(123));
    }

    #[test]
    fn renders_a_whole_cross() {
        let result = compute(11, Category::Khaki).unwrap();
        let rendered = render_result(&result, NumeralScript::Urdu);
        assert_eq!(rendered[0], (Position::Top, "۶".to_string()));
        assert_eq!(rendered[4], (Position::Bottom, "۱".to_string()));
    }

    #[test]
    fn script_tags_parse() {
        assert_eq!("Urdu".parse::<NumeralScript>().unwrap(), NumeralScript::Urdu);
        assert!(matches!(
            "roman".parse::<NumeralScript>(),
            Err(CrossError::UnknownScript(_))
        ));
    }
}
