// src/cli/compute.rs
use crate::cross::numerals::{render_text, render_value};
use crate::cross::{compute_from_text, Category, CrossError, CrossResult, NumeralScript};

use super::CliError;

const GAP: &str = "   ";

pub fn run(input: &str, category: &str, script: &str, json: bool) -> Result<String, CliError> {
    // Tags first: a bad tag is a configuration problem regardless of the number.
    let category: Category = category.parse()?;
    let script: NumeralScript = script.parse()?;
    let result = compute_from_text(input, category).map_err(CrossError::from)?;

    if json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(format!(
            "{} cross for {}\n\n{}",
            category.label(),
            render_text(input.trim(), script),
            format_cross(&result, script)
        ))
    }
}

/// Plain-text cross, cells right-aligned to the widest value.
pub fn format_cross(result: &CrossResult, script: NumeralScript) -> String {
    let cell = |v: i64| render_value(v, script);
    let (top, left, center, right, bottom) = (
        cell(result.top),
        cell(result.left),
        cell(result.center),
        cell(result.right),
        cell(result.bottom),
    );
    let width = [&top, &left, &center, &right, &bottom]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let pad = |s: &str| format!("{:>width$}", s, width = width);
    let blank = " ".repeat(width);

    [
        [blank.clone(), pad(&top), blank.clone()],
        [pad(&left), pad(&center), pad(&right)],
        [blank.clone(), pad(&bottom), blank],
    ]
    .iter()
    .map(|row| row.join(GAP).trim_end().to_string())
    .collect::<Vec<_>>()
    .join("\n")
}
