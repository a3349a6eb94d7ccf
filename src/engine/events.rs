//! Events emitted while a match is played.
//!
//! Presentation code (commentary, reports) reads these; the engine never
//! formats text itself.

use super::predictor::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    GameStarted {
        team_a: String,
        team_b: String,
        captain_a: String,
        captain_b: String,
        total_overs: u32,
    },

    InningsStarted {
        batting_team: String,
    },

    /// One delivery. Running totals are after the ball was applied.
    BallResolved {
        /// 1-based position within the over
        ball_in_over: u32,
        /// Completed overs before this ball
        over: u32,
        batter: String,
        bowler: String,
        outcome: Outcome,
        runs: u32,
        score: u32,
        wickets: u32,
        overs: u32,
    },

    /// `new_batter` is `None` when nobody is left to come in.
    WicketFallen {
        new_batter: Option<String>,
    },

    /// `next_bowler` is `None` when the over ended the innings.
    OverCompleted {
        over_number: u32,
        next_bowler: Option<String>,
    },

    InningsEnded {
        runs: u32,
        wickets: u32,
        overs: u32,
    },

    /// `winner` is `None` for a tie, with a zero margin.
    MatchEnded {
        winner: Option<String>,
        margin: u32,
    },
}
