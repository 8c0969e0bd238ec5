use serde::{Deserialize, Serialize};

use crate::Randomness;

/// The color of a [die](Die), which fixes its faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Orange,
}

/// What a rolled die shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Fox,
    Chicken,
    DoubleChicken,
    Egg,
    Blank,
}

pub const WHITE_FACES: [Face; 6] = [
    Face::Fox,
    Face::Chicken,
    Face::Egg,
    Face::Egg,
    Face::Egg,
    Face::Blank,
];

pub const YELLOW_FACES: [Face; 6] = [
    Face::Fox,
    Face::Chicken,
    Face::Chicken,
    Face::Egg,
    Face::Egg,
    Face::Blank,
];

pub const ORANGE_FACES: [Face; 6] = [
    Face::Fox,
    Face::Fox,
    Face::DoubleChicken,
    Face::DoubleChicken,
    Face::Blank,
    Face::Blank,
];

impl Color {
    pub fn faces(self) -> &'static [Face; 6] {
        match self {
            Color::White => &WHITE_FACES,
            Color::Yellow => &YELLOW_FACES,
            Color::Orange => &ORANGE_FACES,
        }
    }
}

impl Face {
    /// Chickens and foxes stay on the table; they are not rolled again.
    pub fn is_locked(self) -> bool {
        matches!(self, Face::Fox | Face::Chicken | Face::DoubleChicken)
    }

    /// How many chickens this face is worth.
    pub fn chickens(self) -> u32 {
        match self {
            Face::Chicken => 1,
            Face::DoubleChicken => 2,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
        };
        f.pad(s)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Face::Fox => "fox",
            Face::Chicken => "chicken",
            Face::DoubleChicken => "double chicken",
            Face::Egg => "egg",
            Face::Blank => "blank",
        };
        f.pad(s)
    }
}

/// A single die. Its value is `None` until it is rolled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Die {
    color: Color,
    value: Option<Face>,
}

impl Die {
    pub fn new(color: Color) -> Self {
        Self { color, value: None }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn faces(&self) -> &'static [Face; 6] {
        self.color.faces()
    }

    pub fn value(&self) -> Option<Face> {
        self.value
    }

    pub fn roll<R: Randomness + ?Sized>(&mut self, rng: &mut R) {
        self.value = Some(self.faces()[rng.face_index()]);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Puts the die on a given face, which must be one of its own.
    pub fn show(&mut self, face: Face) {
        assert!(
            self.faces().contains(&face),
            "a {} die has no {} face",
            self.color,
            face
        );
        self.value = Some(face);
    }

    pub fn is_locked(&self) -> bool {
        self.value.is_some_and(Face::is_locked)
    }
}
