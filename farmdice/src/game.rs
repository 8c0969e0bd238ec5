use tracing::{debug, info};

use crate::{DiceSet, GameId, Player, PlayerId, Randomness, Recorder, Turn};

/// A player who reaches this score wins the game.
pub const WIN_SCORE: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub win_score: i32,
    /// Give up on a game that hasn't been won after this many rounds.
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            max_rounds: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won {
        player_idx: usize,
        player_id: PlayerId,
        score: i32,
        round: u32,
    },
    Abandoned {
        round: u32,
    },
}

/// A game between a fixed list of players who share one dice set.
pub struct Game {
    pub id: GameId,
    pub players: Vec<Player>,
    /// Number of fully completed rounds.
    pub round: u32,
    dice_set: DiceSet,
    config: GameConfig,
}

impl Game {
    /// Creates a game with a random number of players.
    pub fn new<R: Randomness + ?Sized>(rng: &mut R, config: GameConfig) -> Self {
        Self::with_players(rng.player_count(), config)
    }

    pub fn with_players(num_players: usize, config: GameConfig) -> Self {
        assert!(num_players > 0, "a game needs at least one player");
        Self {
            id: GameId::new(),
            players: (0..num_players).map(|_| Player::new()).collect(),
            round: 0,
            dice_set: DiceSet::new(),
            config,
        }
    }

    /// Plays rounds until a player reaches the winning score.
    ///
    /// Every turn is handed to the recorder as soon as it is over. Returns an
    /// error only if the recorder fails. The round in which the game is won
    /// is not counted as completed.
    pub fn play<R, W>(&mut self, rng: &mut R, recorder: &mut W) -> anyhow::Result<GameResult>
    where
        R: Randomness + ?Sized,
        W: Recorder + ?Sized,
    {
        info!(game_id = %self.id, players = self.players.len(), "New game");
        loop {
            if let Some(max_rounds) = self.config.max_rounds {
                if self.round >= max_rounds {
                    info!(game_id = %self.id, round = self.round, "Game abandoned");
                    return Ok(GameResult::Abandoned { round: self.round });
                }
            }

            for (player_idx, player) in self.players.iter_mut().enumerate() {
                let mut turn = Turn::new(&mut self.dice_set, self.id, self.round, player.id);
                player.score += turn.play(rng);
                recorder.record(turn.record())?;
                debug!(
                    round = self.round,
                    player = %player.id,
                    score = player.score,
                    "Turn over"
                );

                if player.score >= self.config.win_score {
                    info!(game_id = %self.id, winner = %player.id, round = self.round, "Game won");
                    return Ok(GameResult::Won {
                        player_idx,
                        player_id: player.id,
                        score: player.score,
                        round: self.round,
                    });
                }
            }
            self.round += 1;
        }
    }
}
