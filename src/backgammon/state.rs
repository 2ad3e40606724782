use crate::{
    backgammon::{Board, CHECKERS_PER_PLAYER, Player},
    error::RulesError,
};

/// Board plus turn metadata. `Copy`, so every speculative move works on a
/// private value and never touches the caller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub turn_number: u32,
}

impl GameState {
    /// Standard starting position, White to move on turn 1.
    pub fn initial() -> Self {
        GameState::with_board(Board::new(), Player::White)
    }

    pub fn with_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
            turn_number: 1,
        }
    }

    pub fn copy(&self) -> Self {
        *self
    }

    /// Hands the move to the opponent. Only the game loop calls this, the
    /// rules engine never changes whose turn it is.
    pub fn next_turn(&mut self) {
        self.current_player = self.current_player.opposite();
        self.turn_number += 1;
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Checks that each player still has exactly [`CHECKERS_PER_PLAYER`] checkers
    /// across points, bar and borne off.
    pub fn validate(&self) -> Result<(), RulesError> {
        for player in Player::BOTH {
            let found = self.board.total_checkers_for(player);
            if found != CHECKERS_PER_PLAYER {
                return Err(RulesError::CheckerCount {
                    player,
                    found,
                    expected: CHECKERS_PER_PLAYER,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::initial()
    }
}
