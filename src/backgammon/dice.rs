use std::{fmt::Debug, str::FromStr};

use rand::Rng;

use crate::{error::RulesError, misc::TinyVec};

/// The two dice rolled for a turn.
///
/// The rules engine only ever consumes a pair of pip values. Doubles are
/// expanded by the game loop: [`Dice::pairs`] yields the same pair twice so
/// that a double is played as four pips in two engine calls.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    die1: u8,
    die2: u8,
}

impl Dice {
    pub const ALL: [Self; 21] = [
        Dice::from_numbers(1, 1), Dice::from_numbers(1, 2), Dice::from_numbers(1, 3),
        Dice::from_numbers(1, 4), Dice::from_numbers(1, 5), Dice::from_numbers(1, 6),
        Dice::from_numbers(2, 2), Dice::from_numbers(2, 3), Dice::from_numbers(2, 4),
        Dice::from_numbers(2, 5), Dice::from_numbers(2, 6),
        Dice::from_numbers(3, 3), Dice::from_numbers(3, 4), Dice::from_numbers(3, 5),
        Dice::from_numbers(3, 6),
        Dice::from_numbers(4, 4), Dice::from_numbers(4, 5), Dice::from_numbers(4, 6),
        Dice::from_numbers(5, 5), Dice::from_numbers(5, 6),
        Dice::from_numbers(6, 6),
    ];

    /// Creates dice without validation. Only use with values in 1..=6.
    pub const fn from_numbers(die1: u8, die2: u8) -> Self {
        Dice { die1, die2 }
    }

    pub fn try_new(die1: u8, die2: u8) -> Result<Self, RulesError> {
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(RulesError::InvalidDie(die));
            }
        }
        Ok(Dice { die1, die2 })
    }

    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let die1 = rng.random_range(1..=6);
        let die2 = rng.random_range(1..=6);
        Dice::from_numbers(die1, die2)
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// Every pip usable this turn, four of them for doubles.
    pub fn pips(&self) -> TinyVec<u8, 4> {
        let uses = if self.is_double() { 2 } else { 1 };
        (0..uses).flat_map(|_| [self.die1, self.die2]).collect()
    }

    /// The pairs handed to [`crate::rules::legal_actions`] in turn order.
    pub fn pairs(&self) -> TinyVec<(u8, u8), 2> {
        let pair = (self.die1, self.die2);
        if self.is_double() {
            [pair, pair].into_iter().collect()
        } else {
            [pair].into_iter().collect()
        }
    }
}

impl FromStr for Dice {
    type Err = RulesError;

    /// Parses `"3-1"`, `"3,1"` or `"31"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .trim()
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .flat_map(|part| part.chars())
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| RulesError::InvalidDice(s.to_string()))?;
        match digits.as_slice() {
            &[die1, die2] => Dice::try_new(die1, die2),
            _ => Err(RulesError::InvalidDice(s.to_string())),
        }
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_double() {
            write!(f, "Double({})", self.die1)
        } else {
            write!(f, "Dice({} | {})", self.die1, self.die2)
        }
    }
}
