use std::fmt::{Debug, Display};

use crate::backgammon::Position;

/// A single checker movement using exactly one die.
///
/// `hit` holds the index of an opposing blot that this step sends to the bar.
/// Steps are produced by [`crate::rules::single_die_moves`] and are only
/// meaningful for the board they were generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    from: Position,
    to: Position,
    hit: Option<u8>,
}

impl Step {
    pub fn new(from: Position, to: Position, hit: Option<u8>) -> Self {
        assert_ne!(from, Position::Off, "Cannot move from off the board");
        assert_ne!(to, Position::Bar, "Cannot move to the bar");
        if let Some(index) = hit {
            assert_eq!(to, Position::Point(index), "a hit must happen on the target point");
        }
        Step { from, to, hit }
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn hit(&self) -> Option<u8> {
        self.hit
    }

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// Standard notation with 1-based point numbers, e.g. `24/22*`.
impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)?;
        if self.is_hit() {
            write!(f, "*")?;
        }
        Ok(())
    }
}

impl Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?}", self.from, self.to)?;
        if let Some(index) = self.hit {
            write!(f, " (hit {})", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let step = Step::new(Position::Point(23), Position::Point(21), Some(21));
        assert_eq!(step.to_string(), "24/22*");
        let step = Step::new(Position::Bar, Position::Point(20), None);
        assert_eq!(step.to_string(), "bar/21");
        let step = Step::new(Position::Point(2), Position::Off, None);
        assert_eq!(step.to_string(), "3/off");
    }

    #[test]
    fn test_structural_equality() {
        let a = Step::new(Position::Point(5), Position::Point(3), None);
        let b = Step::new(Position::Point(5), Position::Point(3), None);
        assert_eq!(a, b);
        assert_ne!(a, Step::new(Position::Point(5), Position::Point(3), Some(3)));
    }

    #[test]
    #[should_panic]
    fn test_hit_away_from_target_panics() {
        Step::new(Position::Point(5), Position::Point(3), Some(4));
    }
}
