use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, GameConfig};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let config = match args.get(2) {
        Some(size) => GameConfig::new(size.parse()?).map_err(|e| anyhow::anyhow!(e))?,
        None => GameConfig::default(),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::with_random_fleets(
        &config,
        Box::new(AiPlayer::named("player1")),
        Box::new(AiPlayer::named("player2")),
        &mut rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.run(&mut rng);

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
