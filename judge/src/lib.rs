mod config;
mod recording;
mod summary;
pub use config::*;
pub use recording::*;
pub use summary::*;

use farmdice::{Cautious, Game, Randomness};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Plays all games requested by `args`, writing every turn to the CSV file.
///
/// Returns an error only on I/O failure.
pub fn run(args: &Args) -> anyhow::Result<Summary> {
    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    if args.cautious {
        play_games(&mut Cautious(rng), args, seed)
    } else {
        play_games(&mut rng, args, seed)
    }
}

fn play_games<R: Randomness>(rng: &mut R, args: &Args, seed: u64) -> anyhow::Result<Summary> {
    let mut csv_recorder = CsvRecorder::create(&args.output)?;
    let mut game_recorder = match &args.record_games_to_directory {
        Some(dir_path) => Some(GameRecorder::new(dir_path.clone())?),
        None => None,
    };
    let mut summary = Summary::new(seed);

    for game_idx in 0..args.num_games {
        let mut game = Game::new(rng, args.game_config());
        let result = {
            let mut recorders = Fanout::new().with(&mut csv_recorder).with(&mut summary);
            if let Some(rec) = game_recorder.as_mut() {
                recorders = recorders.with(rec);
            }
            game.play(rng, &mut recorders)?
        };
        debug!(game_idx, ?result);

        if let Some(rec) = game_recorder.as_mut() {
            rec.write_game_recording(game.id)?;
        }
        summary.add_game(game.players.len(), &result);
    }

    csv_recorder.finish()?;
    Ok(summary)
}
