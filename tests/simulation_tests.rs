//! Whole games driven through the rules engine.

use backgammon_rules::backgammon::CHECKERS_PER_PLAYER;
use backgammon_rules::config::SimulationConfig;
use backgammon_rules::simulation::{play_game, run_simulations};

#[test]
fn test_games_are_deterministic_per_seed() {
    let a = play_game(42, 2_000).unwrap();
    let b = play_game(42, 2_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_games_finish() {
    for seed in 0..10 {
        let summary = play_game(seed, 10_000).unwrap();
        assert!(summary.winner.is_some(), "game {seed} did not finish");
        assert!(summary.steps >= CHECKERS_PER_PLAYER as u32);
    }
}

#[test]
fn test_turn_limit_stops_game() {
    let summary = play_game(5, 3).unwrap();
    assert_eq!(summary.turns, 3);
    assert_eq!(summary.winner, None);
}

#[test]
fn test_parallel_matches_sequential() {
    let config = SimulationConfig {
        games: 16,
        seed: 1234,
        max_turns: 2_000,
        parallel: true,
    };
    let parallel = run_simulations(&config).unwrap();
    let sequential = run_simulations(&SimulationConfig { parallel: false, ..config }).unwrap();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.games, 16);
    assert_eq!(
        parallel.white_wins + parallel.black_wins + parallel.unfinished,
        16
    );
}

#[test]
fn test_both_players_can_win() {
    let config = SimulationConfig {
        games: 40,
        seed: 0,
        max_turns: 10_000,
        parallel: true,
    };
    let report = run_simulations(&config).unwrap();
    assert!(report.white_wins > 0);
    assert!(report.black_wins > 0);
}
