pub use dice_set::*;
pub use die::*;
pub use game::*;
pub use player::*;
pub use random::*;
pub use record::*;
pub use turn::*;

#[cfg(test)]
mod arbitrary;
mod dice_set;
mod die;
mod game;
mod player;
mod random;
mod record;
mod turn;
mod visualization;
