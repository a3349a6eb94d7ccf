//! Per-ball outcome decision and runs off the bat.
//!
//! Whether the batter survives is a pure function of the two players and the
//! pitch. All randomness lives in [`RunModel`] and in bowler/captain draws.

use crate::core::constants::MAX_RUNS_PER_BALL;
use crate::roster::{Field, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Dismissed,
    Survived,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Dismissed => "OUT",
            Outcome::Survived => "NOT OUT",
        }
    }
}

/// Decides dismissal vs. survival for one ball.
pub trait OutcomePredictor {
    fn predict(&self, batter: &Player, bowler: &Player, field: &Field) -> Outcome;
}

/// Batting skill against bowling skill, both scaled by pitch conditions.
/// Ties go to the bowler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillPredictor;

impl OutcomePredictor for SkillPredictor {
    fn predict(&self, batter: &Player, bowler: &Player, field: &Field) -> Outcome {
        let batting_score = batter.batting * field.pitch_conditions;
        let bowling_score = bowler.bowling * field.pitch_conditions;
        if batting_score > bowling_score {
            Outcome::Survived
        } else {
            Outcome::Dismissed
        }
    }
}

/// Runs scored off a ball the batter survived.
pub trait RunModel {
    fn runs_off_bat(&self, rng: &mut impl Rng) -> u32;
}

/// Uniform draw from `0..=MAX_RUNS_PER_BALL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRuns;

impl RunModel for UniformRuns {
    fn runs_off_bat(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(0..=MAX_RUNS_PER_BALL)
    }
}

/// Same number of runs every ball. Consumes no randomness.
#[derive(Debug, Clone, Copy)]
pub struct FixedRuns(pub u32);

impl RunModel for FixedRuns {
    fn runs_off_bat(&self, _rng: &mut impl Rng) -> u32 {
        self.0
    }
}
