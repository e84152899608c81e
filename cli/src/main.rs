use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lightsout_core::{BoardConfig, Coord};

use command::{Command, CommandError};
use session::{Flow, Session};

mod command;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Turn every light off", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Number of rows
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.0)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.1)]
    cols: Coord,

    /// Chance of each light starting on
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CHANCE_ON)]
    chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scramble a dark board with random presses, so it can always be cleared
    #[arg(long)]
    scrambled: bool,

    /// Print a JSON snapshot of the game after every move
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = BoardConfig::new((args.rows, args.cols), args.chance)
        .context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting {}x{} game", config.size.0, config.size.1);

    let mut session = Session::new(config, seed, args.scrambled, args.json);
    let mut out = io::stdout().lock();
    session.show(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        if session.handle(command, &mut out)? == Flow::Quit {
            break;
        }
    }

    log::debug!("Session ended after {} moves", session.engine().moves());
    Ok(())
}
