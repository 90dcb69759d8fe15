use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Direction for movement between rooms.
///
/// The room graph only wires `Forward` and `Backward`; `Left` and `Right` are
/// accepted as input and simply find no exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Deeper into the office.
    Forward,
    /// Back the way you came.
    Backward,
    /// Reserved.
    Left,
    /// Reserved.
    Right,
}

impl Direction {
    /// All directions in display order.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a string, accepting short forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "f" | "forward" | "forwards" => Some(Self::Forward),
            "b" | "back" | "backward" | "backwards" => Some(Self::Backward),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The direction that leads back.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_forms() {
        assert_eq!(Direction::parse("f"), Some(Direction::Forward));
        assert_eq!(Direction::parse("BACK"), Some(Direction::Backward));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, CoreError::UnknownDirection("sideways".into()));
    }

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
