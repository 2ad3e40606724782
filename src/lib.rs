//! # Backgammon rules
//!
//! Board representation, legal move generation and move application for
//! backgammon under a simplified rule set.
//!
//! ## Modules
//!
//! - [`backgammon`]: Board, players, dice, steps and actions, game state
//! - [`rules`]: Geometry helpers, move generation, move application
//! - [`simulation`]: Headless random self-play over the rules engine
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod backgammon;
pub mod config;
pub mod error;
pub mod misc;
pub mod rules;
pub mod simulation;
