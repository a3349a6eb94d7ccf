//! Match simulation engine.
//!
//! Leaves first: [`predictor`] decides each ball, [`scoreboard`] and
//! [`batting_order`] hold per-innings state, [`innings`] drives the
//! ball-by-ball loop and [`match_sim`] plays two innings and names a winner.

pub mod batting_order;
pub mod events;
pub mod innings;
pub mod match_sim;
pub mod predictor;
pub mod scoreboard;

pub use batting_order::{BattingOrder, BowlerPool};
pub use events::MatchEvent;
pub use innings::{Conditions, Innings, InningsResult, InningsState, InningsSummary};
pub use match_sim::{Match, MatchRecord, MatchResult};
pub use predictor::{FixedRuns, Outcome, OutcomePredictor, RunModel, SkillPredictor, UniformRuns};
pub use scoreboard::Scoreboard;
