use farmdice::{GameResult, Recorder, TurnRecord};

/// Aggregate statistics over all games of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub seed: u64,
    pub games: usize,
    pub games_won: usize,
    pub games_abandoned: usize,
    pub players: usize,
    pub rounds: u64,
    pub turns: usize,
    pub busts: usize,
    pub cash_outs: usize,
    pub resets: usize,
}

impl Summary {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn add_game(&mut self, num_players: usize, result: &GameResult) {
        self.games += 1;
        self.players += num_players;
        match *result {
            GameResult::Won { round, .. } => {
                self.games_won += 1;
                // The winning round is played but not completed
                self.rounds += u64::from(round) + 1;
            }
            GameResult::Abandoned { round } => {
                self.games_abandoned += 1;
                self.rounds += u64::from(round);
            }
        }
    }

    fn per_game(&self, total: f32) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            total / self.games as f32
        }
    }

    fn percent_of_turns(&self, count: usize) -> f32 {
        if self.turns == 0 {
            0.0
        } else {
            count as f32 / self.turns as f32 * 100.0
        }
    }
}

impl Recorder for Summary {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.turns += 1;
        if record.roll_1_bust || record.roll_2_bust {
            self.busts += 1;
        }
        if record.roll_2_pass {
            self.cash_outs += 1;
        }
        if record.roll_1_reset {
            self.resets += 1;
        }
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "End result (seed {}):", self.seed)?;
        writeln!(
            f,
            "- {} games, {} won, {} abandoned",
            self.games, self.games_won, self.games_abandoned
        )?;
        writeln!(
            f,
            "- {:.1} players and {:.1} rounds per game",
            self.per_game(self.players as f32),
            self.per_game(self.rounds as f32)
        )?;
        write!(
            f,
            "- {} turns: {:5.1}% bust, {:5.1}% cashed out, {:5.1}% reset",
            self.turns,
            self.percent_of_turns(self.busts),
            self.percent_of_turns(self.cash_outs),
            self.percent_of_turns(self.resets)
        )
    }
}
