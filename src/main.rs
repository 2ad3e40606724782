use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use backgammon_rules::{
    backgammon::{Dice, GameState},
    config::AppConfig,
    rules::legal_actions,
    simulation::run_simulations,
};

/// Backgammon rules engine driver.
#[derive(Parser)]
#[command(name = "backgammon", about = "Backgammon rules engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play random self-play games and report the results
    Simulate {
        /// Path to TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override base seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the legal actions from the starting position
    Moves {
        /// Dice to play, e.g. 3-1
        #[arg(long)]
        dice: String,
    },
    /// Print a configuration file with all default values
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { config, games, seed, json } => {
            let mut app_config = AppConfig::load_or_default(&config)
                .with_context(|| format!("loading config from {}", config.display()))?;
            if let Some(games) = games {
                app_config.simulation.games = games;
            }
            if let Some(seed) = seed {
                app_config.simulation.seed = seed;
            }
            app_config.validate()?;

            let simulation = &app_config.simulation;
            if !json {
                println!(
                    "Playing {} games (seed {}, max {} turns)...",
                    simulation.games, simulation.seed, simulation.max_turns
                );
            }
            let start = Instant::now();
            let report = run_simulations(simulation).context("simulation failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Finished in {:.2?}", start.elapsed());
                println!("White wins: {}", report.white_wins);
                println!("Black wins: {}", report.black_wins);
                println!("Unfinished: {}", report.unfinished);
                println!("Average turns: {:.1}", report.average_turns);
                println!("Hits: {}  Passes: {}", report.total_hits, report.total_passes);
            }
        }
        Command::Moves { dice } => {
            let dice: Dice = dice.parse().with_context(|| format!("parsing dice '{dice}'"))?;
            let state = GameState::initial();
            println!("{}\n", state.board);
            let actions = legal_actions(&state, (dice.die1(), dice.die2()));
            println!("{} to play {:?}: {} actions", state.current_player, dice, actions.len());
            for action in actions {
                println!("  {}", action);
            }
        }
        Command::DefaultConfig => print!("{}", AppConfig::default_toml()),
    }

    Ok(())
}
