//! Headless game loop: roll, ask the rules engine for legal actions, pick one
//! uniformly at random, apply it and hand the turn over. Used to exercise the
//! engine over whole games, not to play well.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    backgammon::{Action, Dice, GameState, Player},
    config::SimulationConfig,
    error::RulesError,
    rules::{apply_action, legal_actions},
};

/// One played turn. `action` is `None` when no legal action existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub dice: Dice,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub winner: Option<Player>,
    pub turns: u32,
    pub passes: u32,
    pub hits: u32,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SimulationReport {
    pub games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub unfinished: usize,
    pub total_turns: u64,
    pub total_passes: u64,
    pub total_hits: u64,
    pub average_turns: f64,
}

impl SimulationReport {
    pub fn from_games(games: &[GameSummary]) -> Self {
        let wins = |player| games.iter().filter(|g| g.winner == Some(player)).count();
        let total_turns: u64 = games.iter().map(|g| g.turns as u64).sum();
        SimulationReport {
            games: games.len(),
            white_wins: wins(Player::White),
            black_wins: wins(Player::Black),
            unfinished: games.iter().filter(|g| g.winner.is_none()).count(),
            total_turns,
            total_passes: games.iter().map(|g| g.passes as u64).sum(),
            total_hits: games.iter().map(|g| g.hits as u64).sum(),
            average_turns: if games.is_empty() {
                0.0
            } else {
                total_turns as f64 / games.len() as f64
            },
        }
    }
}

/// Plays one turn for the current player with `dice` and advances to the
/// opponent. Doubles are played as two engine calls with the same pair.
pub fn play_turn<R: Rng + ?Sized>(
    state: &GameState,
    dice: Dice,
    rng: &mut R,
) -> Result<(GameState, Turn), RulesError> {
    let player = state.current_player;
    let mut next = state.copy();
    let mut played: Option<Action> = None;

    for &pair in dice.pairs().iter() {
        if next.is_game_over() {
            break;
        }
        let actions = legal_actions(&next, pair);
        let Some(action) = actions.choose(rng) else {
            continue;
        };
        next = apply_action(&next, action);
        next.validate()?;
        played = Some(match played {
            Some(previous) => previous.chain(action),
            None => *action,
        });
    }

    next.next_turn();
    Ok((next, Turn { player, dice, action: played }))
}

/// Plays a full game from the starting position with a seeded rng.
pub fn play_game(seed: u64, max_turns: u32) -> Result<GameSummary, RulesError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::initial();
    let mut summary = GameSummary {
        seed,
        winner: None,
        turns: 0,
        passes: 0,
        hits: 0,
        steps: 0,
    };

    while !state.is_game_over() && summary.turns < max_turns {
        let dice = Dice::roll(&mut rng);
        let (next, turn) = play_turn(&state, dice, &mut rng)?;
        summary.turns += 1;
        match turn.action {
            Some(action) => {
                summary.hits += action.hits() as u32;
                summary.steps += action.len() as u32;
            }
            None => summary.passes += 1,
        }
        state = next;
    }

    summary.winner = state.winner();
    Ok(summary)
}

pub fn run_simulations(config: &SimulationConfig) -> Result<SimulationReport, RulesError> {
    let play = |i: usize| play_game(config.seed.wrapping_add(i as u64), config.max_turns);

    let games: Vec<GameSummary> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(play)
            .collect::<Result<_, _>>()?
    } else {
        (0..config.games).map(play).collect::<Result<_, _>>()?
    };

    Ok(SimulationReport::from_games(&games))
}
