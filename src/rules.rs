//! Move generation and application.
//!
//! Every function here is a pure transformation: it reads a [`GameState`] and
//! either returns the legal moves or a new state. Illegal candidates are simply
//! left out, an empty result means the player has to pass. The rule set is a
//! simplified one: playing a single die is always offered next to playing both,
//! and any home checker whose target overshoots the board may bear off once all
//! checkers are home.

use std::ops::Range;

use hashbrown::HashSet;

use crate::backgammon::{Action, Board, GameState, POINTS, Player, Position, Step};

pub fn other_player(player: Player) -> Player {
    player.opposite()
}

/// White moves towards index 0, Black towards index 23.
pub fn direction_for(player: Player) -> i8 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

pub fn home_board_range(player: Player) -> Range<u8> {
    match player {
        Player::White => 0..6,
        Player::Black => 18..24,
    }
}

/// Index a checker entering from the bar lands on. White enters in Black's
/// home board (23..=18), Black in White's (0..=5).
pub fn entry_point_from_bar(player: Player, die: u8) -> u8 {
    assert_die(die);
    match player {
        Player::White => 24 - die,
        Player::Black => die - 1,
    }
}

/// Whether every checker of `player` is in its home board or borne off.
/// Checkers on the bar count as outside.
pub fn all_in_home(board: &Board, player: Player) -> bool {
    let total = board.total_checkers_for(player);
    let borne_off = board.borne_off(player);
    if borne_off == total {
        return true;
    }

    let in_home: u8 = home_board_range(player)
        .filter(|&i| board.owner_of_point(i) == Some(player))
        .map(|i| board.count_on_point(i))
        .sum();

    in_home + borne_off == total
}

enum Landing {
    Open,
    Hit,
    Blocked,
}

fn landing(board: &Board, player: Player, target: u8) -> Landing {
    match board.owner_of_point(target) {
        Some(owner) if owner != player => match board.count_on_point(target) {
            1 => Landing::Hit,
            _ => Landing::Blocked,
        },
        _ => Landing::Open,
    }
}

fn step_onto(board: &Board, player: Player, from: Position, target: u8) -> Option<Step> {
    match landing(board, player, target) {
        Landing::Open => Some(Step::new(from, Position::Point(target), None)),
        Landing::Hit => Some(Step::new(from, Position::Point(target), Some(target))),
        Landing::Blocked => None,
    }
}

/// All legal steps of the current player using one die.
///
/// Checkers on the bar must enter first: while the bar is not empty the only
/// candidate is the entry point for `die`, and the result is empty when that
/// point is blocked. Otherwise board points are scanned in ascending order.
pub fn single_die_moves(state: &GameState, die: u8) -> Vec<Step> {
    assert_die(die);
    let board = &state.board;
    let player = state.current_player;

    if board.bar(player) > 0 {
        let target = entry_point_from_bar(player, die);
        return step_onto(board, player, Position::Bar, target)
            .into_iter()
            .collect();
    }

    let home = home_board_range(player);
    let can_bear_off = all_in_home(board, player);
    let mut moves = Vec::new();

    for index in board.points_of(player) {
        let target = index as i8 + direction_for(player) * die as i8;
        if !(0..POINTS as i8).contains(&target) {
            if can_bear_off && home.contains(&index) {
                moves.push(Step::new(Position::Point(index), Position::Off, None));
            }
            continue;
        }
        if let Some(step) = step_onto(board, player, Position::Point(index), target as u8) {
            moves.push(step);
        }
    }

    moves
}

/// Every distinct action for the current player with the pair `dice`: each
/// single step with either die, and each two step sequence in both die orders.
pub fn legal_actions(state: &GameState, dice: (u8, u8)) -> Vec<Action> {
    let (die1, die2) = dice;
    let first_steps = [single_die_moves(state, die1), single_die_moves(state, die2)];

    let mut seen = HashSet::new();
    let mut actions = Vec::new();
    let mut push = |action: Action| {
        if seen.insert(action) {
            actions.push(action);
        }
    };

    for &step in first_steps.iter().flatten() {
        push(Action::single(step));
    }

    for (steps, second_die) in first_steps.iter().zip([die2, die1]) {
        for &first in steps {
            let next = apply_step(state, &first);
            for second in single_die_moves(&next, second_die) {
                push(Action::pair(first, second));
            }
        }
    }

    actions
}

/// Returns a new state with `step` played by the current player. A hit blot
/// goes to the bar before the mover lands. The turn is not advanced.
pub fn apply_step(state: &GameState, step: &Step) -> GameState {
    let mut next = state.copy();
    let player = next.current_player;

    if let Some(index) = step.hit() {
        next.board.hit_checker_at(other_player(player), index);
    }
    next.board.move_checker(player, step.from(), step.to());

    next
}

pub fn apply_action(state: &GameState, action: &Action) -> GameState {
    action
        .steps()
        .iter()
        .fold(state.copy(), |next, step| apply_step(&next, step))
}

fn assert_die(die: u8) {
    assert!((1..=6).contains(&die), "invalid die value {die}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_opposite() {
        assert_eq!(direction_for(Player::White), -1);
        assert_eq!(direction_for(Player::Black), 1);
        assert_eq!(other_player(Player::White), Player::Black);
    }

    #[test]
    fn test_home_boards() {
        assert_eq!(home_board_range(Player::White), 0..6);
        assert_eq!(home_board_range(Player::Black), 18..24);
    }

    #[test]
    fn test_entry_points_mirror() {
        for die in 1..=6 {
            let white = entry_point_from_bar(Player::White, die);
            let black = entry_point_from_bar(Player::Black, die);
            assert_eq!(white, 23 - black);
            assert!(home_board_range(Player::Black).contains(&white));
            assert!(home_board_range(Player::White).contains(&black));
        }
        assert_eq!(entry_point_from_bar(Player::White, 3), 21);
        assert_eq!(entry_point_from_bar(Player::Black, 3), 2);
    }

    #[test]
    #[should_panic]
    fn test_invalid_die_panics() {
        single_die_moves(&GameState::initial(), 7);
    }

    #[test]
    fn test_all_in_home() {
        let mut board = Board::empty();
        board.set_point(3, Player::White, 4);
        board.set_borne_off(Player::White, 11);
        assert!(all_in_home(&board, Player::White));

        board.set_point(6, Player::White, 1);
        assert!(!all_in_home(&board, Player::White));

        board.clear_point(6);
        board.set_bar(Player::White, 1);
        assert!(!all_in_home(&board, Player::White));
    }

    #[test]
    fn test_all_borne_off_is_home() {
        let mut board = Board::empty();
        board.set_borne_off(Player::Black, 15);
        assert!(all_in_home(&board, Player::Black));
    }

    #[test]
    fn test_opening_moves() {
        let state = GameState::initial();
        let moves = single_die_moves(&state, 6);
        // 8/2, 13/7 and 24/18 are open, 6/off is not allowed yet
        let froms: Vec<_> = moves.iter().map(|s| s.from()).collect();
        assert_eq!(
            froms,
            vec![Position::Point(7), Position::Point(12), Position::Point(23)]
        );
        assert!(moves.iter().all(|s| !s.is_hit()));
    }

    #[test]
    fn test_apply_action_threads_state() {
        let state = GameState::initial();
        let actions = legal_actions(&state, (3, 1));
        let action = actions
            .iter()
            .find(|a| a.to_string() == "8/5 6/5")
            .copied()
            .expect("8/5 6/5 is a legal opening");
        let next = apply_action(&state, &action);
        assert_eq!(next.board.count_on_point(4), 2);
        assert_eq!(next.board.count_on_point(7), 2);
        assert_eq!(next.board.count_on_point(5), 4);
        assert_eq!(next.current_player, Player::White);
        assert_eq!(next.turn_number, 1);
        assert_eq!(state, GameState::initial());
    }
}
