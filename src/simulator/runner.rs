//! Runs one seeded match from a configuration.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::constants::DEFAULT_TOTAL_OVERS;
use crate::engine::Match;
use crate::error::Result;
use crate::roster::{default_setup, load_setup, MatchSetup};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Load the setup, play the match and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    config.validate()?;

    let mut setup = match &config.setup_path {
        Some(path) => load_setup(path)?,
        None => default_setup(),
    };
    if config.total_overs.is_some() {
        setup.total_overs = config.total_overs;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Simulating with seed {}", seed);

    simulate_match(setup, seed)
}

/// Play one match from a setup with a fixed seed.
pub fn simulate_match(setup: MatchSetup, seed: u64) -> Result<SimReport> {
    let field = setup.field.clone();
    let mut game = Match::from_setup(setup, DEFAULT_TOTAL_OVERS)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let record = game.play(&mut rng)?;
    Ok(SimReport::new(seed, field, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchEvent;

    #[test]
    fn test_same_seed_same_match() {
        let first = run_simulation(&SimConfig::seeded(12345, 2)).unwrap();
        let second = run_simulation(&SimConfig::seeded(12345, 2)).unwrap();
        assert_eq!(first.record.events, second.record.events);
        assert_eq!(first.record.result, second.record.result);
    }

    #[test]
    fn test_unseeded_run_reports_its_seed() {
        let config = SimConfig {
            total_overs: Some(1),
            ..Default::default()
        };
        let report = run_simulation(&config).unwrap();
        let replay = simulate_match(
            MatchSetup {
                total_overs: Some(1),
                ..default_setup()
            },
            report.seed,
        )
        .unwrap();
        assert_eq!(report.record.events, replay.record.events);
    }

    #[test]
    fn test_config_overs_override_setup() {
        let report = run_simulation(&SimConfig::seeded(7, 3)).unwrap();
        assert_eq!(report.record.total_overs, 3);
        match report.record.events.first() {
            Some(MatchEvent::GameStarted { total_overs, .. }) => assert_eq!(*total_overs, 3),
            other => panic!("expected GameStarted, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_setup_file_is_an_error() {
        let config = SimConfig {
            setup_path: Some("/nonexistent/crease.json".into()),
            ..Default::default()
        };
        assert!(run_simulation(&config).is_err());
    }
}
