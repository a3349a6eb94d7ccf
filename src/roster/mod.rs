//! Rosters, grounds and match setup loading.

pub mod data;
pub mod types;

pub use data::{default_away_team, default_field, default_home_team, default_setup};
pub use types::{Field, MatchSetup, Player, Team};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load and validate a match setup from a JSON file.
pub fn load_setup(path: &Path) -> Result<MatchSetup> {
    let contents = fs::read_to_string(path)?;
    let setup = parse_setup(&contents)?;
    log::info!(
        "Loaded setup from {}: {} vs {}",
        path.display(),
        setup.home.name,
        setup.away.name
    );
    Ok(setup)
}

/// Parse and validate a match setup from a JSON string.
pub fn parse_setup(json: &str) -> Result<MatchSetup> {
    let setup: MatchSetup = serde_json::from_str(json)?;
    setup.validate()?;
    Ok(setup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    const SETUP_JSON: &str = r#"{
        "home": { "name": "Reds", "players": [
            { "name": "A", "bowling": 0.4, "batting": 0.6, "fielding": 0.5, "running": 0.5, "experience": 0.5 }
        ]},
        "away": { "name": "Blues", "players": [
            { "name": "B", "bowling": 0.6, "batting": 0.4, "fielding": 0.5, "running": 0.5, "experience": 0.5 }
        ]},
        "field": { "size": "Small", "fan_ratio": 0.3, "pitch_conditions": 0.9, "home_advantage": 0.1 },
        "total_overs": 3
    }"#;

    #[test]
    fn test_parse_setup() {
        let setup = parse_setup(SETUP_JSON).unwrap();
        assert_eq!(setup.home.name, "Reds");
        assert_eq!(setup.away.players[0].name, "B");
        assert_eq!(setup.total_overs, Some(3));
        assert!(setup.home.captain.is_none());
    }

    #[test]
    fn test_parse_setup_rejects_malformed_json() {
        assert!(matches!(parse_setup("{ not json"), Err(SimError::Parse(_))));
    }

    #[test]
    fn test_parse_setup_rejects_empty_roster() {
        let json = SETUP_JSON.replace(
            r#"{ "name": "A", "bowling": 0.4, "batting": 0.6, "fielding": 0.5, "running": 0.5, "experience": 0.5 }"#,
            "",
        );
        let err = parse_setup(&json).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_load_setup_missing_file() {
        let err = load_setup(Path::new("/nonexistent/crease/setup.json")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
