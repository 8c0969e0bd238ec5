use rand::Rng;

/// The source of every random draw made by the engine.
///
/// Any [`rand::Rng`] is a `Randomness`, so a seeded
/// [`StdRng`](rand::rngs::StdRng) gives reproducible games.
pub trait Randomness {
    /// Uniform index into the six faces of a die.
    fn face_index(&mut self) -> usize;

    /// An unbiased coin flip, used for the reset and cash-out decisions.
    fn coin_flip(&mut self) -> bool;

    /// Uniform number of players in `[MIN_PLAYERS, MAX_PLAYERS]`.
    fn player_count(&mut self) -> usize;
}

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

impl<R: Rng + ?Sized> Randomness for R {
    fn face_index(&mut self) -> usize {
        self.gen_range(0..6)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen::<bool>()
    }

    fn player_count(&mut self) -> usize {
        self.gen_range(MIN_PLAYERS..=MAX_PLAYERS)
    }
}

/// Wraps a random source, but never resets and never cashes out.
///
/// Dice and player count still come from the wrapped source, so a turn
/// only ends by busting or by scoring its second roll.
#[derive(Clone, Debug)]
pub struct Cautious<R>(pub R);

impl<R: Randomness> Randomness for Cautious<R> {
    fn face_index(&mut self) -> usize {
        self.0.face_index()
    }

    fn coin_flip(&mut self) -> bool {
        false
    }

    fn player_count(&mut self) -> usize {
        self.0.player_count()
    }
}

/// Replays fixed sequences of draws. Panics when a sequence runs dry.
#[cfg(test)]
pub(crate) struct Scripted {
    pub faces: std::collections::VecDeque<usize>,
    pub flips: std::collections::VecDeque<bool>,
    pub players: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(faces: &[usize], flips: &[bool]) -> Self {
        Self {
            faces: faces.iter().copied().collect(),
            flips: flips.iter().copied().collect(),
            players: MIN_PLAYERS,
        }
    }
}

#[cfg(test)]
impl Randomness for Scripted {
    fn face_index(&mut self) -> usize {
        self.faces.pop_front().expect("ran out of scripted faces")
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().expect("ran out of scripted coin flips")
    }

    fn player_count(&mut self) -> usize {
        self.players
    }
}
