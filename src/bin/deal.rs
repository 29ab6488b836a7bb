use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use freecell_rules::{GameState, Rules, Seed};

#[derive(Debug, Parser)]
#[command(name = "deal", about = "Print the classic FreeCell deal for a game number")]
struct Args {
    /// Game number 0..=999999
    #[arg(default_value_t = 1)]
    seed: u32,

    /// Ignore SEED and deal a random game
    #[arg(long)]
    random: bool,

    /// Emit JSON instead of the text layout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DealOut {
    seed: u32,
    solvable: bool,
    deal: Vec<&'static str>,
    board: Vec<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = if args.random {
        Seed::random(&mut rand::thread_rng())
    } else {
        Seed::new(args.seed).map_err(|e| {
            eprintln!("[deal] {e}");
            e
        })?
    };

    let game = GameState::new(seed, Rules::default());

    if args.json {
        let out = DealOut {
            seed: seed.get(),
            solvable: seed.is_solvable(),
            deal: game.deal().iter().map(|c| c.sym).collect(),
            board: game.board().raw().to_vec(),
        };
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!(
        "Game #{seed}{}",
        if seed.is_solvable() { "" } else { " (unsolvable)" }
    );
    print!("{}", game.board());
    Ok(())
}
