//! Two-innings match orchestration.
//!
//! The home side bats first. Each innings gets its own scoreboard, batting
//! order and bowler pool; the match keeps only the two finished summaries.

use super::events::MatchEvent;
use super::innings::{Conditions, Innings, InningsResult, InningsSummary};
use super::predictor::{OutcomePredictor, RunModel, SkillPredictor, UniformRuns};
use crate::error::{Result, SimError};
use crate::roster::{Field, MatchSetup, Team};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the match was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchResult {
    Win {
        winner: String,
        loser: String,
        margin: u32,
    },
    Tie {
        runs: u32,
    },
}

impl MatchResult {
    /// Strictly higher score wins; equal scores are a tie.
    pub fn decide(first: &InningsSummary, second: &InningsSummary) -> Self {
        let (winner, loser) = match first.runs.cmp(&second.runs) {
            std::cmp::Ordering::Equal => return MatchResult::Tie { runs: first.runs },
            std::cmp::Ordering::Greater => (first, second),
            std::cmp::Ordering::Less => (second, first),
        };
        MatchResult::Win {
            winner: winner.batting_team.clone(),
            loser: loser.batting_team.clone(),
            margin: winner.runs.abs_diff(loser.runs),
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::Win { winner, .. } => Some(winner),
            MatchResult::Tie { .. } => None,
        }
    }

    pub fn margin(&self) -> u32 {
        match self {
            MatchResult::Win { margin, .. } => *margin,
            MatchResult::Tie { .. } => 0,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, MatchResult::Tie { .. })
    }
}

/// A completed match: both innings, the result and every event in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_captain: String,
    pub away_captain: String,
    pub total_overs: u32,
    pub first_innings: InningsSummary,
    pub second_innings: InningsSummary,
    pub result: MatchResult,
    pub events: Vec<MatchEvent>,
}

pub struct Match<P = SkillPredictor, M = UniformRuns> {
    home: Team,
    away: Team,
    field: Field,
    total_overs: u32,
    predictor: P,
    run_model: M,
}

impl Match<SkillPredictor, UniformRuns> {
    /// A match using the skill-based outcome model and uniform runs.
    pub fn new(home: Team, away: Team, field: Field, total_overs: u32) -> Result<Self> {
        Self::with_models(home, away, field, total_overs, SkillPredictor, UniformRuns)
    }

    /// Build from a loaded setup; the setup's own overs win over `default_overs`.
    pub fn from_setup(setup: MatchSetup, default_overs: u32) -> Result<Self> {
        let total_overs = setup.total_overs.unwrap_or(default_overs);
        Self::new(setup.home, setup.away, setup.field, total_overs)
    }
}

impl<P: OutcomePredictor, M: RunModel> Match<P, M> {
    /// Validates both rosters, the field and the over count up front so a
    /// bad setup never reaches the first ball.
    pub fn with_models(
        home: Team,
        away: Team,
        field: Field,
        total_overs: u32,
        predictor: P,
        run_model: M,
    ) -> Result<Self> {
        home.validate()?;
        away.validate()?;
        field.validate()?;
        if total_overs == 0 {
            return Err(SimError::InvalidSetup(
                "total_overs must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            home,
            away,
            field,
            total_overs,
            predictor,
            run_model,
        })
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn total_overs(&self) -> u32 {
        self.total_overs
    }

    /// Play both innings and decide the result.
    pub fn play<R: Rng>(&mut self, rng: &mut R) -> Result<MatchRecord> {
        let home_captain = self.home.select_captain(rng)?.name.clone();
        let away_captain = self.away.select_captain(rng)?.name.clone();

        log::info!(
            "{} vs {} over {} overs (captains {} and {})",
            self.home.name,
            self.away.name,
            self.total_overs,
            home_captain,
            away_captain
        );

        let mut events = vec![MatchEvent::GameStarted {
            team_a: self.home.name.clone(),
            team_b: self.away.name.clone(),
            captain_a: home_captain.clone(),
            captain_b: away_captain.clone(),
            total_overs: self.total_overs,
        }];

        let first = self.play_innings(&self.home, &self.away, rng)?;
        events.extend(first.events);
        let second = self.play_innings(&self.away, &self.home, rng)?;
        events.extend(second.events);

        let result = MatchResult::decide(&first.summary, &second.summary);
        match &result {
            MatchResult::Win {
                winner, margin, ..
            } => log::info!("{} won by {} runs", winner, margin),
            MatchResult::Tie { runs } => log::info!("Match tied on {} runs", runs),
        }

        events.push(MatchEvent::MatchEnded {
            winner: result.winner().map(str::to_string),
            margin: result.margin(),
        });

        Ok(MatchRecord {
            home_captain,
            away_captain,
            total_overs: self.total_overs,
            first_innings: first.summary,
            second_innings: second.summary,
            result,
            events,
        })
    }

    fn play_innings<R: Rng>(
        &self,
        batting: &Team,
        bowling: &Team,
        rng: &mut R,
    ) -> Result<InningsResult> {
        let conditions = Conditions {
            field: &self.field,
            predictor: &self.predictor,
            run_model: &self.run_model,
            total_overs: self.total_overs,
        };
        Innings::start(
            conditions,
            batting.name.clone(),
            batting.players.len(),
            batting.batting_order(),
            bowling.bowler_pool(),
            rng,
        )?
        .play(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::innings::InningsState;
    use crate::roster::{default_setup, Player};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn summary(team: &str, runs: u32) -> InningsSummary {
        InningsSummary {
            batting_team: team.to_string(),
            bowling_team: "Other".to_string(),
            runs,
            wickets: 0,
            overs: 2,
            balls_faced: 12,
            ended_by: InningsState::OversComplete,
        }
    }

    #[test]
    fn test_decide_first_innings_higher() {
        let result = MatchResult::decide(&summary("CSK", 40), &summary("MI", 31));
        assert_eq!(result.winner(), Some("CSK"));
        assert_eq!(result.margin(), 9);
    }

    #[test]
    fn test_decide_second_innings_higher() {
        let result = MatchResult::decide(&summary("CSK", 12), &summary("MI", 30));
        assert_eq!(
            result,
            MatchResult::Win {
                winner: "MI".to_string(),
                loser: "CSK".to_string(),
                margin: 18
            }
        );
    }

    #[test]
    fn test_decide_equal_scores_is_a_tie() {
        let result = MatchResult::decide(&summary("CSK", 24), &summary("MI", 24));
        assert!(result.is_tie());
        assert_eq!(result.winner(), None);
        assert_eq!(result.margin(), 0);
    }

    #[test]
    fn test_empty_roster_is_rejected_before_play() {
        let setup = default_setup();
        let result = Match::new(
            setup.home,
            Team::new("Ghosts", Vec::new()),
            setup.field,
            2,
        );
        assert!(matches!(result, Err(SimError::NoActorsAvailable { .. })));
    }

    #[test]
    fn test_captains_come_from_their_own_rosters() {
        let mut game = Match::from_setup(default_setup(), 2).unwrap();
        assert_eq!(game.total_overs(), 2);
        assert_eq!(game.field().size, "Large");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let record = game.play(&mut rng).unwrap();
        assert!(game
            .home()
            .players
            .iter()
            .any(|p| p.name == record.home_captain));
        assert!(game
            .away()
            .players
            .iter()
            .any(|p| p.name == record.away_captain));
    }

    #[test]
    fn test_from_setup_prefers_the_setup_overs() {
        let game = Match::from_setup(default_setup(), 20).unwrap();
        assert_eq!(game.total_overs(), 2);

        let open = MatchSetup {
            total_overs: None,
            ..default_setup()
        };
        let game = Match::from_setup(open, 20).unwrap();
        assert_eq!(game.total_overs(), 20);
    }

    #[test]
    fn test_home_side_bats_first() {
        let mut game = Match::from_setup(default_setup(), 2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let record = game.play(&mut rng).unwrap();
        assert_eq!(record.first_innings.batting_team, "CSK");
        assert_eq!(record.first_innings.bowling_team, "MI");
        assert_eq!(record.second_innings.batting_team, "MI");
        assert_eq!(record.second_innings.bowling_team, "CSK");
    }

    #[test]
    fn test_innings_do_not_share_scoreboards() {
        let solo = |name: &str| Team::new(name, vec![Player::new("Only", 0.9, 0.1, 0.5, 0.5, 0.5)]);
        let mut game = Match::new(solo("A"), solo("B"), Field::new("Tiny", 0.1, 0.8, 0.0), 1)
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let record = game.play(&mut rng).unwrap();
        // Batting 0.1 against bowling 0.9: both openers out first ball
        assert_eq!(record.first_innings.balls_faced, 1);
        assert_eq!(record.second_innings.balls_faced, 1);
        assert_eq!(record.second_innings.runs, 0);
        assert!(record.result.is_tie());
    }
}
