use clap::Parser;
use fastrand::Rng;
use itertools::Itertools;
use log::info;
use nxcube_core::{CubeState, scramble};

mod net;

/// Scrambles and displays generalized N×N×N cubes
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Print a solved cube
    Show {
        /// Cube side length; at least 2
        #[arg(short = 'n', long, default_value_t = 3)]
        side: usize,
    },
    /// Apply random face turns to a solved cube and print the result
    Scramble {
        /// Cube side length; at least 2
        #[arg(short = 'n', long, default_value_t = 3)]
        side: usize,
        /// How many random turns to apply
        #[arg(short, long, default_value_t = 20)]
        turns: usize,
        /// Seed for the turn sequence; picked at random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Show { side } => {
            let cube = CubeState::solved(side)?;
            print!("{}", net::render(&cube));
        }
        Commands::Scramble { side, turns, seed } => {
            let mut cube = CubeState::solved(side)?;
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            info!("scramble seed {seed}");

            let sequence = scramble(&mut cube, &mut Rng::with_seed(seed), turns);
            println!("{}", sequence.iter().map(ToString::to_string).join(" "));
            print!("{}", net::render(&cube));
        }
    }

    Ok(())
}
