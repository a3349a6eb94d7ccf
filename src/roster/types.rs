//! Player, team and field records.
//!
//! These are plain data. The engine reads `batting`, `bowling` and
//! `pitch_conditions`; every other attribute is carried for completeness and
//! does not influence outcomes.

use crate::core::constants::{SKILL_MAX, SKILL_MIN};
use crate::engine::batting_order::{BattingOrder, BowlerPool};
use crate::error::{Result, RosterRole, SimError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A player with fixed skill scalars in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, not required to be unique
    pub name: String,
    pub bowling: f64,
    pub batting: f64,
    /// Not consumed by the outcome model
    pub fielding: f64,
    /// Not consumed by the outcome model
    pub running: f64,
    /// Not consumed by the outcome model
    pub experience: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        bowling: f64,
        batting: f64,
        fielding: f64,
        running: f64,
        experience: f64,
    ) -> Self {
        Self {
            name: name.into(),
            bowling,
            batting,
            fielding,
            running,
            experience,
        }
    }

    /// Check every skill scalar lies in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let skills = [
            ("bowling", self.bowling),
            ("batting", self.batting),
            ("fielding", self.fielding),
            ("running", self.running),
            ("experience", self.experience),
        ];
        for (label, value) in skills {
            if !(SKILL_MIN..=SKILL_MAX).contains(&value) {
                return Err(SimError::InvalidSetup(format!(
                    "{} skill of {} is {}, expected {}..={}",
                    label, self.name, value, SKILL_MIN, SKILL_MAX
                )));
            }
        }
        Ok(())
    }
}

/// A team's fixed membership plus its (cosmetic) captain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
            captain: None,
        }
    }

    /// Pick a captain uniformly at random. Has no effect on play.
    pub fn select_captain<R: Rng>(&mut self, rng: &mut R) -> Result<&Player> {
        let captain = self
            .players
            .choose(rng)
            .cloned()
            .ok_or_else(|| self.empty(RosterRole::Captaincy))?;
        Ok(&*self.captain.insert(captain))
    }

    /// A fresh batting order in roster sequence.
    pub fn batting_order(&self) -> BattingOrder {
        BattingOrder::new(self.players.iter().cloned())
    }

    /// A fresh bowler pool holding the whole roster.
    pub fn bowler_pool(&self) -> BowlerPool {
        BowlerPool::new(self.name.clone(), self.players.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(self.empty(RosterRole::Batting));
        }
        self.players.iter().try_for_each(Player::validate)
    }

    fn empty(&self, role: RosterRole) -> SimError {
        SimError::NoActorsAvailable {
            team: self.name.clone(),
            role,
        }
    }
}

/// Ground conditions. Only `pitch_conditions` feeds the outcome model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Descriptive, e.g. "Large"
    pub size: String,
    pub fan_ratio: f64,
    pub pitch_conditions: f64,
    pub home_advantage: f64,
}

impl Field {
    pub fn new(
        size: impl Into<String>,
        fan_ratio: f64,
        pitch_conditions: f64,
        home_advantage: f64,
    ) -> Self {
        Self {
            size: size.into(),
            fan_ratio,
            pitch_conditions,
            home_advantage,
        }
    }

    /// Pitch conditions must be finite and non-negative; a negative scalar
    /// would flip which side the outcome model favours.
    pub fn validate(&self) -> Result<()> {
        if !self.pitch_conditions.is_finite() || self.pitch_conditions < 0.0 {
            return Err(SimError::InvalidSetup(format!(
                "pitch conditions must be a non-negative number, got {}",
                self.pitch_conditions
            )));
        }
        Ok(())
    }
}

/// Everything needed to play one match, as loaded from a setup file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub home: Team,
    pub away: Team,
    pub field: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_overs: Option<u32>,
}

impl MatchSetup {
    pub fn validate(&self) -> Result<()> {
        self.home.validate()?;
        self.away.validate()?;
        self.field.validate()?;
        if self.total_overs == Some(0) {
            return Err(SimError::InvalidSetup(
                "total_overs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pair() -> Team {
        Team::new(
            "Pair",
            vec![
                Player::new("Opener", 0.2, 0.8, 0.5, 0.5, 0.5),
                Player::new("Closer", 0.9, 0.1, 0.5, 0.5, 0.5),
            ],
        )
    }

    #[test]
    fn test_player_validate_rejects_out_of_range_skill() {
        let player = Player::new("Overrated", 0.5, 1.5, 0.5, 0.5, 0.5);
        let err = player.validate().unwrap_err();
        assert!(err.to_string().contains("batting"));
    }

    #[test]
    fn test_select_captain_picks_a_roster_member() {
        let mut team = pair();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let name = team.select_captain(&mut rng).unwrap().name.clone();
        assert!(team.players.iter().any(|p| p.name == name));
        assert_eq!(team.captain.as_ref().map(|c| c.name.as_str()), Some(name.as_str()));
    }

    #[test]
    fn test_select_captain_on_empty_team_fails() {
        let mut team = Team::new("Ghosts", Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let err = team.select_captain(&mut rng).unwrap_err();
        assert!(matches!(
            err,
            SimError::NoActorsAvailable {
                role: RosterRole::Captaincy,
                ..
            }
        ));
    }

    #[test]
    fn test_batting_order_is_a_fresh_copy() {
        let team = pair();
        let mut first = team.batting_order();
        assert_eq!(first.next().unwrap().name, "Opener");
        // A second order is unaffected by the first being drawn from
        assert_eq!(team.batting_order().remaining(), 2);
    }

    #[test]
    fn test_empty_team_fails_validation() {
        let team = Team::new("Ghosts", Vec::new());
        assert!(team.validate().unwrap_err().is_precondition());
    }

    #[test]
    fn test_field_rejects_negative_pitch() {
        let field = Field::new("Small", 0.5, -0.1, 0.5);
        assert!(field.validate().is_err());
        assert!(Field::new("Small", 0.5, 0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_setup_rejects_zero_overs() {
        let setup = MatchSetup {
            home: pair(),
            away: pair(),
            field: Field::new("Large", 0.7, 0.8, 0.9),
            total_overs: Some(0),
        };
        assert!(matches!(setup.validate(), Err(SimError::InvalidSetup(_))));
    }
}
