//! Simulation configuration.

use crate::error::{Result, SimError};
use std::path::PathBuf;

/// Configuration for a single simulated match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Random seed for reproducibility (None = pick one and report it)
    pub seed: Option<u64>,

    /// Overs per innings; overrides the setup file when set
    pub total_overs: Option<u32>,

    /// JSON match setup to load instead of the built-in rosters
    pub setup_path: Option<PathBuf>,

    /// Output verbosity (0 = result only, 1 = ball-by-ball, 2+ = engine logs)
    pub verbosity: u8,

    /// Write a JSON report next to the text output
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            total_overs: None,
            setup_path: None,
            verbosity: 1,
            json: false,
        }
    }
}

impl SimConfig {
    /// Reproducible config for a given seed and match length.
    pub fn seeded(seed: u64, total_overs: u32) -> Self {
        Self {
            seed: Some(seed),
            total_overs: Some(total_overs),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_overs == Some(0) {
            return Err(SimError::InvalidSetup(
                "total_overs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
