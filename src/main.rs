use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, Game, GameConfig, GameStatus, Side, DEFAULT_GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Board side length")]
        size: usize,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Board side length")]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        size: DEFAULT_GRID_SIZE,
    }) {
        Commands::Play { seed, size } => play(seed, size),
        Commands::Auto { seed, size } => auto(seed, size),
    }
}

fn play(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let config = GameConfig::new(size).map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = make_rng(seed);
    let mut game = Game::with_random_fleets(
        &config,
        Box::new(CliPlayer::stdio()),
        Box::new(AiPlayer::new()),
        &mut rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.board_mut(Side::Second).set_concealed(true);

    ui::greet();
    while game.status() == GameStatus::InProgress {
        ui::print_boards(&game);
        ui::print_turn(&game);
        game.step(&mut rng);
    }
    game.board_mut(Side::Second).set_concealed(false);
    ui::print_boards(&game);
    println!("{}", ui::outcome(&game));
    Ok(())
}

fn auto(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let config = GameConfig::new(size).map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = make_rng(seed);
    let mut game = Game::with_random_fleets(
        &config,
        Box::new(AiPlayer::named("Computer 1")),
        Box::new(AiPlayer::named("Computer 2")),
        &mut rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    println!("Starting computer vs computer game...");
    game.run(&mut rng);
    ui::print_boards(&game);
    println!(
        "{} ({} / {} shots)",
        ui::outcome(&game),
        game.shots(Side::First),
        game.shots(Side::Second)
    );
    Ok(())
}
