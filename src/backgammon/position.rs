use std::fmt::Display;

use crate::{backgammon::POINTS, error::RulesError};

/// Endpoint of a single checker movement.
///
/// A step starts from the bar or a point and ends on a point or off the board.
/// Point indices are 0-based; human facing point numbers (1..=24) are converted
/// with [`Position::from_point_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Bar,
    Off,
    Point(u8),
}

impl Position {
    pub fn from_point_number(number: u8) -> Result<Self, RulesError> {
        if (1..=POINTS as u8).contains(&number) {
            Ok(Position::Point(number - 1))
        } else {
            Err(RulesError::InvalidPoint(number))
        }
    }

    pub fn index(&self) -> Option<u8> {
        match self {
            Position::Point(index) => Some(*index),
            _ => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Bar => write!(f, "bar"),
            Position::Off => write!(f, "off"),
            Position::Point(index) => write!(f, "{}", index + 1),
        }
    }
}
