mod board;
pub use board::{Board, CHECKERS_PER_PLAYER, POINTS};

mod player;
pub use player::Player;

mod position;
pub use position::Position;

mod state;
pub use state::GameState;

mod step;
pub use step::Step;

mod action;
pub use action::Action;

mod dice;
pub use dice::Dice;
