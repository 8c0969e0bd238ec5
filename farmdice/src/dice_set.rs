use tracing::trace;

use crate::{Color, Die, Face, Randomness};

/// Number of white dice a turn starts with.
pub const STARTING_DICE: usize = 4;
/// At most this many yellow and this many orange dice can be in play.
pub const MAX_PER_COLOR: usize = 4;

/// The dice currently in play, shared by all players of a game.
///
/// Eggs hatch into yellow dice, and once all four yellows are in play,
/// into orange ones. Chickens and foxes stay locked between the two rolls
/// of a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSet {
    /// Creates a set of four unrolled white dice.
    pub fn new() -> Self {
        let mut set = Self { dice: Vec::new() };
        set.reset_to_starting();
        set
    }

    /// Builds a set from arbitrary dice, e.g. a position to analyze.
    ///
    /// Panics if there are more than four dice of yellow or orange.
    pub fn from_dice(dice: Vec<Die>) -> Self {
        let set = Self { dice };
        set.check_color_caps();
        set
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn reset_to_starting(&mut self) {
        trace!("Resetting dice set");
        self.dice.clear();
        self.dice
            .extend(std::iter::repeat_with(|| Die::new(Color::White)).take(STARTING_DICE));
        assert!(
            self.count_dice() == STARTING_DICE && self.count_color(Color::White) == STARTING_DICE,
            "dice set did not reset to {} white dice:\n{}",
            STARTING_DICE,
            self
        );
    }

    pub fn clear_values(&mut self) {
        trace!("Resetting dice values");
        for die in self.dice.iter_mut() {
            die.clear();
        }
    }

    /// Rolls every die that isn't showing a chicken, double chicken or fox.
    pub fn roll_all<R: Randomness + ?Sized>(&mut self, rng: &mut R) {
        for die in self.dice.iter_mut().filter(|die| !die.is_locked()) {
            die.roll(rng);
        }
        trace!("\n{}", self);
    }

    /// Hatches every egg showing into a new yellow die, or an orange die
    /// once four yellows are in play. Calling this twice on the same roll
    /// hatches the eggs twice.
    pub fn add_dice(&mut self) {
        let eggs = self.count_face(Face::Egg);
        let yellows = self.count_color(Color::Yellow);
        let oranges = self.count_color(Color::Orange);

        let yellows_to_add = eggs.min(MAX_PER_COLOR - yellows);
        let oranges_to_add = if yellows + yellows_to_add == MAX_PER_COLOR {
            (eggs - yellows_to_add).min(MAX_PER_COLOR - oranges)
        } else {
            0
        };

        self.dice
            .extend(std::iter::repeat_with(|| Die::new(Color::Yellow)).take(yellows_to_add));
        self.dice
            .extend(std::iter::repeat_with(|| Die::new(Color::Orange)).take(oranges_to_add));
        if yellows_to_add + oranges_to_add > 0 {
            trace!(eggs, yellows_to_add, oranges_to_add, "Hatched eggs");
        }
        self.check_color_caps();
    }

    pub fn count_dice(&self) -> usize {
        self.dice.len()
    }

    /// A double chicken counts as two.
    pub fn count_chickens(&self) -> u32 {
        self.dice
            .iter()
            .filter_map(Die::value)
            .map(Face::chickens)
            .sum()
    }

    pub fn count_foxes(&self) -> u32 {
        self.count_face(Face::Fox) as u32
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.dice.iter().filter(|die| die.color() == color).count()
    }

    fn count_face(&self, face: Face) -> usize {
        self.dice
            .iter()
            .filter(|die| die.value() == Some(face))
            .count()
    }

    fn check_color_caps(&self) {
        assert!(
            self.count_color(Color::Yellow) <= MAX_PER_COLOR
                && self.count_color(Color::Orange) <= MAX_PER_COLOR,
            "dice set exceeds the color caps:\n{}",
            self
        );
    }
}
