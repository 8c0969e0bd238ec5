use quickcheck::Arbitrary;

use crate::{Color, DiceSet, Die};

#[derive(Clone, Debug)]
pub struct DiceSetInput {
    pub dice_set: DiceSet,
}

impl Arbitrary for DiceSetInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Any number of whites, but the yellow and orange caps must hold
        let whites = usize::arbitrary(g) % 9;
        let yellows = usize::arbitrary(g) % 5;
        let oranges = usize::arbitrary(g) % 5;

        let mut dice = Vec::with_capacity(whites + yellows + oranges);
        for (color, count) in [
            (Color::White, whites),
            (Color::Yellow, yellows),
            (Color::Orange, oranges),
        ] {
            for _ in 0..count {
                let mut die = Die::new(color);
                if bool::arbitrary(g) {
                    die.show(*g.choose(color.faces()).unwrap());
                }
                dice.push(die);
            }
        }
        // Shuffle so that colors are interleaved
        for i in (1..dice.len()).rev() {
            let j = usize::arbitrary(g) % (i + 1);
            dice.swap(i, j);
        }

        DiceSetInput {
            dice_set: DiceSet::from_dice(dice),
        }
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::White, Color::Yellow, Color::Orange])
            .unwrap()
    }
}
