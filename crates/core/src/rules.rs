use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn new(chips: i64, mult: f64) -> Self {
        Self { chips, mult }
    }

    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }

    pub fn apply(&mut self, effect: &RuleEffect) {
        match effect {
            RuleEffect::AddChips(value) => self.chips += value,
            RuleEffect::AddMult(value) => self.mult += value,
            RuleEffect::MultiplyMult(value) => self.mult *= value,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum RuleEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
}

/// One step of the scoring replay: the running totals after `message`
/// was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreLogEntry {
    pub chips: i64,
    pub mult: f64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_floors_fractional_products() {
        let mut score = Score::new(31, 2.0);
        score.apply(&RuleEffect::MultiplyMult(1.5));
        assert_eq!(score.mult, 3.0);
        score.apply(&RuleEffect::AddMult(0.25));
        assert_eq!(score.total(), 100);
    }
}
