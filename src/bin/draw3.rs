//! Draw 3 command line game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use cardgame::{Draw3, Draw3Game, GameOptions, Outcome, Player};

/// Players used when none are given.
const DEFAULT_PLAYERS: [&str; 2] = ["Buck", "Cherry"];

/// Plays the Draw 3 card game.
#[derive(Debug, Parser)]
struct Cli {
    /// Comma-delimited list of player names.
    #[clap(long, value_delimiter = ',')]
    players: Vec<String>,
    /// Verbose feedback of game progress.
    #[clap(long, short)]
    verbose: bool,
    /// Do not randomize turn order.
    #[clap(long, alias = "random_off")]
    random_off: bool,
    /// Seed for reproducible shuffles.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Trims names and rejects duplicates, ignoring case.
fn player_names(raw: &[String]) -> Result<Vec<String>> {
    if raw.is_empty() {
        return Ok(DEFAULT_PLAYERS.iter().map(|&n| n.to_owned()).collect());
    }

    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        let name = name.trim();
        if names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            bail!("Please make sure each player name is unique. {name} appears more than once.");
        }
        names.push(name.to_owned());
    }

    Ok(names)
}

fn run(cli: &Cli) -> Result<()> {
    let names = player_names(&cli.players)?;
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut options = GameOptions::default().with_random_turn_order(!cli.random_off);
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }

    let mut game = Draw3Game::with_options(Draw3, options);
    game.setup_game(None, &names)?;

    if cli.verbose {
        println!("\nStarting game...\n");
        game.on_round_start(|round| println!("Round #{round}"));
        if game.random_turn_order() {
            println!("Randomizing turn order");
        }
    }

    game.start_game()?;

    if cli.verbose {
        let names: Vec<&str> = game.players().iter().map(Player::name).collect();
        println!("Players are:  {}", names.join(", "));
    }

    while let Some(player) = game.next_turn()? {
        if cli.verbose {
            if let Some(card) = player.last_card() {
                println!("{} drew a {card}", player.name());
            }
        }
    }

    match game.outcome() {
        Outcome::Winner(player) => {
            println!("\n{} won with {} points", player.name(), player.score());
        }
        Outcome::Tie(players) => {
            let Some((last, rest)) = players.split_last() else {
                bail!("Unable to determine winners.");
            };

            let tie_type = if players.len() > 2 {
                format!("{}-way ", players.len())
            } else {
                String::new()
            };

            let names: Vec<&str> = rest.iter().map(Player::name).collect();
            println!(
                "\nIt's a {tie_type}tie between {} and {} at {} points!",
                names.join(", "),
                last.name(),
                last.score()
            );
        }
        Outcome::NoPlayers => bail!("Unable to determine winners."),
    }

    Ok(())
}
