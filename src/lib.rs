//! Crease - Limited-Overs Cricket Match Simulator
//!
//! This library exposes the match engine for testing and external use.
//! Runs are reproducible: every random draw comes from a caller-supplied RNG.

pub mod build_info;
pub mod commentary;
pub mod core;
pub mod engine;
pub mod error;
pub mod roster;
pub mod simulator;

pub use engine::{Match, MatchEvent, MatchRecord, MatchResult, Outcome};
pub use error::{Result, SimError};
pub use roster::{Field, MatchSetup, Player, Team};
