use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use uno::uno_game::{ConsoleUI, GameConfig, GameController, GameError, JsonLinesObserver};

/// Uno for any mix of humans and robots sharing one console.
#[derive(Parser, Debug)]
#[command(name = "uno", version)]
struct Cli {
    /// Number of human players (asked for when omitted)
    #[arg(long)]
    humans: Option<usize>,

    /// Number of robot players (asked for when omitted)
    #[arg(long)]
    robots: Option<usize>,

    /// Seed for shuffling and robot choices, for a repeatable game
    #[arg(long)]
    seed: Option<u64>,

    /// Write every game event to this file as JSON lines
    #[arg(long)]
    transcript: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    match play(cli) {
        Ok(winner) => {
            info!("Game finished, {} won", winner);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Game aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(cli: Cli) -> Result<String, GameError> {
    let ui = ConsoleUI::new();
    println!("Welcome to Uno!");

    let humans = match cli.humans {
        Some(n) => n,
        None => ui.ask_count(
            "How many human players do you want? (Best gameplay if less than 8) ",
        )?,
    };
    let robots = match cli.robots {
        Some(n) => n,
        None => ui.ask_count(
            "How many robot players do you want? (Best gameplay if less than 3) ",
        )?,
    };
    let config = GameConfig::new(humans, robots, cli.seed);

    let transcript = match &cli.transcript {
        Some(path) => Some(JsonLinesObserver::new(BufWriter::new(File::create(path)?))),
        None => None,
    };

    let mut controller = GameController::new(&config, ui)?;
    controller.run(transcript)
}
