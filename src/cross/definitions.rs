// src/cross/definitions.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CrossError;

/// One of the four "type" tabs. Decides which computed value lands in which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Naari,
    Maai,
    Hawaai,
    Khaki,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 4] = [
        Category::Naari,
        Category::Maai,
        Category::Hawaai,
        Category::Khaki,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Naari => "naari",
            Category::Maai => "maai",
            Category::Hawaai => "hawaai",
            Category::Khaki => "khaki",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Naari => "Naari",
            Category::Maai => "Maai",
            Category::Hawaai => "Hawaai",
            Category::Khaki => "Khaki",
        }
    }

    /// Position receiving each of `[v0, v1, v2, v3, v4]`, in calculation order.
    pub fn order(self) -> [Position; 5] {
        use Position::*;
        match self {
            Category::Naari => [Top, Left, Center, Right, Bottom],
            Category::Maai => [Right, Bottom, Center, Top, Left],
            Category::Hawaai => [Left, Bottom, Center, Top, Right],
            Category::Khaki => [Bottom, Right, Center, Left, Top],
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Category {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CrossError::UnknownCategory(tag.to_string()))
    }
}

/// The five cells of the cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Left,
    Center,
    Right,
    Bottom,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Top,
        Position::Left,
        Position::Center,
        Position::Right,
        Position::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
            Position::Bottom => "bottom",
        }
    }
}

/// Five integers placed on the cross for one `(input, category)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossResult {
    pub input: i64,
    pub category: Category,
    pub top: i64,
    pub left: i64,
    pub center: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CrossResult {
    /// Places `values` (calculation order) according to `category`.
    pub(crate) fn from_ordered(input: i64, category: Category, values: [i64; 5]) -> Self {
        let mut result = CrossResult {
            input,
            category,
            top: 0,
            left: 0,
            center: 0,
            right: 0,
            bottom: 0,
        };
        for (position, value) in category.order().into_iter().zip(values) {
            *result.slot_mut(position) = value;
        }
        result
    }

    fn slot_mut(&mut self, position: Position) -> &mut i64 {
        match position {
            Position::Top => &mut self.top,
            Position::Left => &mut self.left,
            Position::Center => &mut self.center,
            Position::Right => &mut self.right,
            Position::Bottom => &mut self.bottom,
        }
    }

    pub fn get(&self, position: Position) -> i64 {
        match position {
            Position::Top => self.top,
            Position::Left => self.left,
            Position::Center => self.center,
            Position::Right => self.right,
            Position::Bottom => self.bottom,
        }
    }

    /// Adjusted values `[v0..v4]` before positional assignment.
    pub fn values(&self) -> [i64; 5] {
        self.category.order().map(|p| self.get(p))
    }
}
