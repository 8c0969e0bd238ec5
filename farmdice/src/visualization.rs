use crate::{DiceSet, Die};

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(face) => write!(f, "{:<6} | {}", self.color(), face),
            None => write!(f, "{:<6} | -", self.color()),
        }
    }
}

/// One line per die, `color | value`, below a rule.
impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", "-".repeat(25))?;
        for die in self.dice() {
            write!(f, "\n{}", die)?;
        }
        Ok(())
    }
}
