//! Error taxonomy for match simulation.
//!
//! Nothing in the engine is retried: every failure here means the match
//! cannot be played (a precondition was not met) or the bookkeeping went
//! wrong (an invariant broke), and the match is aborted.

use thiserror::Error;

/// Which part of a roster ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterRole {
    Batting,
    Bowling,
    Captaincy,
}

impl std::fmt::Display for RosterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RosterRole::Batting => "batting",
            RosterRole::Bowling => "bowling",
            RosterRole::Captaincy => "captaincy",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("No players available for {role} in team {team}")]
    NoActorsAvailable { team: String, role: RosterRole },

    #[error("Team {team} has {wickets} wickets down with only {roster_size} players")]
    WicketInvariant {
        team: String,
        wickets: u32,
        roster_size: usize,
    },

    #[error("Invalid match setup: {0}")]
    InvalidSetup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Setup parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimError {
    /// The match could not start with the inputs it was given.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SimError::NoActorsAvailable { .. } | SimError::InvalidSetup(_)
        )
    }

    /// The engine's own bookkeeping went wrong mid-match.
    pub fn is_invariant(&self) -> bool {
        matches!(self, SimError::WicketInvariant { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_classification() {
        let empty = SimError::NoActorsAvailable {
            team: "CSK".to_string(),
            role: RosterRole::Batting,
        };
        assert!(empty.is_precondition());
        assert!(!empty.is_invariant());

        let wickets = SimError::WicketInvariant {
            team: "MI".to_string(),
            wickets: 12,
            roster_size: 11,
        };
        assert!(wickets.is_invariant());
        assert!(!wickets.is_precondition());
    }

    #[test]
    fn test_error_messages_name_the_team() {
        let err = SimError::NoActorsAvailable {
            team: "CSK".to_string(),
            role: RosterRole::Bowling,
        };
        assert_eq!(err.to_string(), "No players available for bowling in team CSK");
    }

    #[test]
    fn test_io_errors_are_neither_precondition_nor_invariant() {
        let err: SimError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_precondition());
        assert!(!err.is_invariant());
    }
}
