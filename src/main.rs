use anyhow::{Context, Result};
use pawnsmith_core::{Position, STARTING_FEN};
use pawnsmith_engine::{EnginePlayer, Game, MaterialEvaluator, SearchConfig, Searcher};
use tracing::info;

/// Self-play stops after this many plies even if the game is still running.
const MAX_PLIES: usize = 200;

/// Usage: `pawnsmith [DEPTH] [FEN...]`
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1).peekable();
    let depth = match args.peek().map(|arg| arg.parse::<u8>()) {
        Some(Ok(depth)) => {
            args.next();
            depth
        }
        _ => SearchConfig::DEFAULT_DEPTH,
    };

    let description: Vec<String> = args.collect();
    let position: Position = if description.is_empty() {
        STARTING_FEN.parse().context("parsing the starting position")?
    } else {
        let text = description.join(" ");
        text.parse()
            .with_context(|| format!("invalid position description {text:?}"))?
    };

    info!(depth, position = %position, "pawnsmith starting self-play");

    let config = SearchConfig::with_depth(depth);
    let engine = || EnginePlayer::new(Searcher::with_evaluator(MaterialEvaluator, config));
    let mut game = Game::new(position, Box::new(engine()), Box::new(engine()));

    let outcome = game.run(MAX_PLIES).context("self-play aborted")?;

    println!("{}", game.position().pretty());
    println!("{}", game.position());
    match outcome {
        Some(outcome) => println!("{outcome} after {} plies", game.history().len()),
        None => println!("stopped after {} plies", game.history().len()),
    }
    Ok(())
}
