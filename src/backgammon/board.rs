use std::fmt::Display;

use crate::backgammon::{Player, Position};

pub const POINTS: usize = 24;
pub const CHECKERS_PER_PLAYER: u8 = 15;

/// Representation of a Backgammon board.
/// Every point stores a signed checker count: positive values are checkers of
/// [`Player::White`], negative values checkers of [`Player::Black`]. The board is
/// always stored from a fixed perspective, it is never flipped between turns.
/// The whole board is `Copy` so speculative move application works on a private
/// copy without sharing any buffer with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; POINTS],
    bar: [u8; 2],
    borne_off: [u8; 2],
}

impl Board {
    /// Creates a new board with the default starting position.
    #[rustfmt::skip]
    pub fn new() -> Self {
        Board {
            points: [-2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2],
            bar: [0, 0],
            borne_off: [0, 0],
        }
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board {
            points: [0; POINTS],
            bar: [0, 0],
            borne_off: [0, 0],
        }
    }

    pub fn owner_of_point(&self, index: u8) -> Option<Player> {
        match self.points[index as usize] {
            0 => None,
            n if n > 0 => Some(Player::White),
            _ => Some(Player::Black),
        }
    }

    pub fn count_on_point(&self, index: u8) -> u8 {
        self.points[index as usize].unsigned_abs()
    }

    /// Signed count, positive for White and negative for Black.
    pub fn checkers_on_point(&self, index: u8) -> i8 {
        self.points[index as usize]
    }

    /// Places `count` checkers of `player` on a point, replacing whatever was there.
    pub fn set_point(&mut self, index: u8, player: Player, count: u8) {
        let count = count as i8;
        self.points[index as usize] = match player {
            Player::White => count,
            Player::Black => -count,
        };
    }

    pub fn clear_point(&mut self, index: u8) {
        self.points[index as usize] = 0;
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn set_bar(&mut self, player: Player, value: u8) {
        self.bar[player.index()] = value;
    }

    pub fn borne_off(&self, player: Player) -> u8 {
        self.borne_off[player.index()]
    }

    pub fn set_borne_off(&mut self, player: Player, value: u8) {
        self.borne_off[player.index()] = value;
    }

    /// Points owned by `player` in ascending index order.
    pub fn points_of(&self, player: Player) -> impl Iterator<Item = u8> + '_ {
        (0..POINTS as u8).filter(move |&i| self.owner_of_point(i) == Some(player))
    }

    pub fn checkers_on_board(&self, player: Player) -> u8 {
        self.points_of(player).map(|i| self.count_on_point(i)).sum()
    }

    /// Every checker of `player`: on points, on the bar and borne off.
    pub fn total_checkers_for(&self, player: Player) -> u8 {
        self.checkers_on_board(player) + self.bar(player) + self.borne_off(player)
    }

    /// Moves one checker of `player`. Panics if the move is impossible on this
    /// board, callers are expected to only pass steps produced by the rules engine.
    pub fn move_checker(&mut self, player: Player, from: Position, to: Position) {
        match from {
            Position::Off => panic!("Cannot move from off the board"),
            Position::Bar => {
                assert!(self.bar(player) > 0, "{player} has no checker on the bar");
                self.bar[player.index()] -= 1;
            }
            Position::Point(index) => {
                assert_eq!(
                    self.owner_of_point(index),
                    Some(player),
                    "{player} has no checker on index {index}"
                );
                let count = self.count_on_point(index);
                self.set_point(index, player, count - 1);
            }
        }
        match to {
            Position::Bar => panic!("Cannot move to the bar"),
            Position::Off => self.borne_off[player.index()] += 1,
            Position::Point(index) => {
                assert_ne!(
                    self.owner_of_point(index),
                    Some(player.opposite()),
                    "index {index} is occupied by {}",
                    player.opposite()
                );
                let count = self.count_on_point(index);
                self.set_point(index, player, count + 1);
            }
        }
    }

    /// Sends one checker of `victim` from `index` to its bar.
    pub fn hit_checker_at(&mut self, victim: Player, index: u8) {
        assert_eq!(
            self.owner_of_point(index),
            Some(victim),
            "no {victim} checker to hit on index {index}"
        );
        let count = self.count_on_point(index);
        self.set_point(index, victim, count - 1);
        self.bar[victim.index()] += 1;
    }

    pub fn winner(&self) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&player| self.borne_off(player) == CHECKERS_PER_PLAYER)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = &self.points;
        writeln!(f, "13  14  15  16  17  18  | O |  19  20  21  22  23  24")?;
        writeln!(
            f,
            "{:2}  {:2}  {:2}  {:2}  {:2}  {:2}  | {:1} |  {:2}  {:2}  {:2}  {:2}  {:2}  {:2}",
            p[12], p[13], p[14], p[15], p[16], p[17],
            self.bar[1],
            p[18], p[19], p[20], p[21], p[22], p[23]
        )?;
        writeln!(f, "=========================================================")?;
        writeln!(
            f,
            "{:2}  {:2}  {:2}  {:2}  {:2}  {:2}  | {:1} |  {:2}  {:2}  {:2}  {:2}  {:2}  {:2}",
            p[11], p[10], p[9], p[8], p[7], p[6],
            self.bar[0],
            p[5], p[4], p[3], p[2], p[1], p[0]
        )?;
        writeln!(f, "12  11  10   9   8   7  | X |   6   5   4   3   2   1")?;
        write!(f, "Off: X {} / O {}", self.borne_off[0], self.borne_off[1])
    }
}
