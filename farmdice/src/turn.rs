use tracing::debug;

use crate::{DiceSet, GameId, PlayerId, Randomness, TurnRecord, STARTING_DICE};

/// This many foxes on the table end the turn with nothing.
pub const FOXES_TO_BUST: u32 = 3;
/// Score of a turn that threw away hatched dice, before anything is rolled.
pub const RESET_PENALTY: i32 = -1;

/// One player's turn against the shared dice set.
///
/// The turn rolls once, then either cashes out, busts, or hatches its eggs
/// and rolls a second time. A turn that scores its second roll hatches the
/// eggs once more, so the next player starts with the extra dice.
pub struct Turn<'a> {
    dice_set: &'a mut DiceSet,
    score: i32,
    record: TurnRecord,
}

impl<'a> Turn<'a> {
    pub fn new(
        dice_set: &'a mut DiceSet,
        game_id: GameId,
        round: u32,
        player_id: PlayerId,
    ) -> Self {
        dice_set.clear_values();
        Self {
            dice_set,
            score: 0,
            record: TurnRecord {
                game_id,
                round,
                player_id,
                ..TurnRecord::default()
            },
        }
    }

    /// Plays the turn and returns its score.
    pub fn play<R: Randomness + ?Sized>(&mut self, rng: &mut R) -> i32 {
        self.record.roll_1_dice = self.dice_set.count_dice();

        // Dice hatched during the previous turn may be given up for a penalty
        if self.dice_set.count_dice() > STARTING_DICE && rng.coin_flip() {
            debug!(dice = self.record.roll_1_dice, "Resetting hatched dice");
            self.dice_set.reset_to_starting();
            self.score = RESET_PENALTY;
            self.record.roll_1_reset = true;
        }

        self.dice_set.roll_all(rng);
        let chickens = self.dice_set.count_chickens();
        let foxes = self.dice_set.count_foxes();
        self.record.roll_1_chickens = chickens;
        self.record.roll_1_foxes = foxes;

        if chickens > 0 && foxes < FOXES_TO_BUST && rng.coin_flip() {
            debug!(chickens, "Cashing out after the first roll");
            self.score += chickens as i32;
            self.record.roll_2_pass = true;
        } else if foxes >= FOXES_TO_BUST {
            debug!(foxes, "Bust on the first roll");
            self.bust();
            self.record.roll_1_bust = true;
        } else {
            self.dice_set.add_dice();
            self.record.roll_2_dice = self.dice_set.count_dice();
            self.dice_set.roll_all(rng);
            let chickens = self.dice_set.count_chickens();
            let foxes = self.dice_set.count_foxes();
            self.record.roll_2_chickens = chickens;
            self.record.roll_2_foxes = foxes;

            if foxes >= FOXES_TO_BUST {
                debug!(foxes, "Bust on the second roll");
                self.bust();
                self.record.roll_2_bust = true;
            } else {
                self.dice_set.add_dice();
                self.score += chickens as i32;
                debug!(chickens, "Scored the second roll");
            }
        }

        self.record.turn_score = self.score;
        self.score
    }

    fn bust(&mut self) {
        self.dice_set.reset_to_starting();
        self.score = 0;
    }

    pub fn record(&self) -> &TurnRecord {
        &self.record
    }

    pub fn into_record(self) -> TurnRecord {
        self.record
    }
}
