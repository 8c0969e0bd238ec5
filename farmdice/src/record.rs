use serde::{Serialize, Serializer};

use crate::{GameId, PlayerId};

/// Everything that was decided and rolled during one turn.
///
/// The field order is the column order of the turn log. Roll-2 counts stay
/// at zero if the turn ended after roll 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub game_id: GameId,
    pub round: u32,
    pub player_id: PlayerId,
    pub roll_1_dice: usize,
    #[serde(serialize_with = "flag")]
    pub roll_1_reset: bool,
    pub roll_1_chickens: u32,
    pub roll_1_foxes: u32,
    #[serde(serialize_with = "flag")]
    pub roll_1_bust: bool,
    pub roll_2_dice: usize,
    /// The player cashed out after roll 1.
    #[serde(serialize_with = "flag")]
    pub roll_2_pass: bool,
    pub roll_2_chickens: u32,
    pub roll_2_foxes: u32,
    #[serde(serialize_with = "flag")]
    pub roll_2_bust: bool,
    pub turn_score: i32,
}

fn flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Receives each finished [`TurnRecord`], in the order the turns were played.
pub trait Recorder {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()>;
}

impl Recorder for Vec<TurnRecord> {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl<T: Recorder + ?Sized> Recorder for &mut T {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        (**self).record(record)
    }
}
