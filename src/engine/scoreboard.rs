//! Running totals for the side currently batting.

use serde::{Deserialize, Serialize};

/// Runs, wickets and completed overs for one innings.
///
/// Each innings owns a fresh scoreboard; `reset` exists for callers that
/// reuse one across innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_runs(&mut self, runs: u32) {
        self.runs += runs;
    }

    /// No upper bound here; the innings checks wickets against roster size.
    pub fn record_wicket(&mut self) {
        self.wickets += 1;
    }

    pub fn complete_over(&mut self) {
        self.overs += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
