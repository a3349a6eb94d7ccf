//! Ball-by-ball innings state machine.
//!
//! An innings starts with a random bowler and the first batter in the order,
//! then bowls one ball at a time until the batting order runs out
//! ([`InningsState::AllOut`]) or the last over is completed
//! ([`InningsState::OversComplete`]), whichever comes first.

use super::batting_order::{BattingOrder, BowlerPool};
use super::events::MatchEvent;
use super::predictor::{Outcome, OutcomePredictor, RunModel};
use super::scoreboard::Scoreboard;
use crate::core::constants::BALLS_PER_OVER;
use crate::error::{Result, SimError};
use crate::roster::{Field, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningsState {
    BallInPlay,
    AllOut,
    OversComplete,
}

impl InningsState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, InningsState::BallInPlay)
    }
}

/// Everything an innings reads but does not own.
pub struct Conditions<'a, P, M> {
    pub field: &'a Field,
    pub predictor: &'a P,
    pub run_model: &'a M,
    pub total_overs: u32,
}

impl<P, M> Clone for Conditions<'_, P, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, M> Copy for Conditions<'_, P, M> {}

/// Immutable snapshot of a finished innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls_faced: u32,
    pub ended_by: InningsState,
}

/// A finished innings plus the events it produced, in order.
#[derive(Debug, Clone)]
pub struct InningsResult {
    pub summary: InningsSummary,
    pub events: Vec<MatchEvent>,
}

pub struct Innings<'a, P, M> {
    conditions: Conditions<'a, P, M>,
    batting_team: String,
    roster_size: usize,
    batting_order: BattingOrder,
    bowlers: BowlerPool,
    scoreboard: Scoreboard,
    batter: Option<Player>,
    bowler: Player,
    /// Balls bowled so far in the current over
    ball_in_over: u32,
    balls_faced: u32,
    state: InningsState,
    events: Vec<MatchEvent>,
}

impl<'a, P: OutcomePredictor, M: RunModel> Innings<'a, P, M> {
    /// Pick the opening bowler and bring in the first batter.
    ///
    /// Fails if the bowling side has nobody to bowl. An empty batting order
    /// is not an error: the innings is over before a ball is bowled.
    pub fn start<R: Rng>(
        conditions: Conditions<'a, P, M>,
        batting_team: impl Into<String>,
        roster_size: usize,
        mut batting_order: BattingOrder,
        bowlers: BowlerPool,
        rng: &mut R,
    ) -> Result<Self> {
        if conditions.total_overs == 0 {
            return Err(SimError::InvalidSetup(
                "total_overs must be at least 1".to_string(),
            ));
        }

        let batting_team = batting_team.into();
        let bowler = bowlers.choose(rng)?.clone();
        let batter = batting_order.next();

        log::info!(
            "{} batting against {}, {} opens the bowling",
            batting_team,
            bowlers.team(),
            bowler.name
        );

        let mut innings = Self {
            conditions,
            events: vec![MatchEvent::InningsStarted {
                batting_team: batting_team.clone(),
            }],
            batting_team,
            roster_size,
            batting_order,
            bowlers,
            scoreboard: Scoreboard::new(),
            batter,
            bowler,
            ball_in_over: 0,
            balls_faced: 0,
            state: InningsState::BallInPlay,
        };

        if innings.batter.is_none() {
            innings.finish(InningsState::AllOut);
        }

        Ok(innings)
    }

    /// Bowl one delivery and apply it. Does nothing once the innings is over.
    pub fn bowl_ball<R: Rng>(&mut self, rng: &mut R) -> Result<InningsState> {
        if self.state.is_finished() {
            return Ok(self.state);
        }
        let Some(batter) = self.batter.take() else {
            self.finish(InningsState::AllOut);
            return Ok(self.state);
        };

        self.ball_in_over += 1;
        self.balls_faced += 1;
        let over = self.scoreboard.overs;

        let outcome =
            self.conditions
                .predictor
                .predict(&batter, &self.bowler, self.conditions.field);

        let mut runs = 0;
        let mut wicket = None;
        match outcome {
            Outcome::Dismissed => match self.batting_order.next() {
                Some(next) => {
                    self.scoreboard.record_wicket();
                    self.check_wickets()?;
                    wicket = Some(MatchEvent::WicketFallen {
                        new_batter: Some(next.name.clone()),
                    });
                    self.batter = Some(next);
                }
                None => {
                    wicket = Some(MatchEvent::WicketFallen { new_batter: None });
                }
            },
            Outcome::Survived => {
                runs = self.conditions.run_model.runs_off_bat(rng);
                self.scoreboard.add_runs(runs);
                self.batter = Some(batter.clone());
            }
        }

        log::trace!(
            "{}.{} {} to {}: {} ({} runs)",
            over,
            self.ball_in_over,
            self.bowler.name,
            batter.name,
            outcome.label(),
            runs
        );

        self.events.push(MatchEvent::BallResolved {
            ball_in_over: self.ball_in_over,
            over,
            batter: batter.name,
            bowler: self.bowler.name.clone(),
            outcome,
            runs,
            score: self.scoreboard.runs,
            wickets: self.scoreboard.wickets,
            overs: self.scoreboard.overs,
        });
        self.events.extend(wicket);

        if self.batter.is_none() {
            self.finish(InningsState::AllOut);
            return Ok(self.state);
        }

        if self.ball_in_over >= BALLS_PER_OVER {
            self.end_over(rng)?;
        }

        Ok(self.state)
    }

    /// Bowl until the innings ends.
    pub fn play<R: Rng>(mut self, rng: &mut R) -> Result<InningsResult> {
        while !self.state.is_finished() {
            self.bowl_ball(rng)?;
        }
        Ok(self.into_result())
    }

    pub fn state(&self) -> InningsState {
        self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn batter(&self) -> Option<&Player> {
        self.batter.as_ref()
    }

    pub fn bowler(&self) -> &Player {
        &self.bowler
    }

    pub fn balls_faced(&self) -> u32 {
        self.balls_faced
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn summary(&self) -> InningsSummary {
        InningsSummary {
            batting_team: self.batting_team.clone(),
            bowling_team: self.bowlers.team().to_string(),
            runs: self.scoreboard.runs,
            wickets: self.scoreboard.wickets,
            overs: self.scoreboard.overs,
            balls_faced: self.balls_faced,
            ended_by: self.state,
        }
    }

    pub fn into_result(self) -> InningsResult {
        InningsResult {
            summary: self.summary(),
            events: self.events,
        }
    }

    fn end_over<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.scoreboard.complete_over();
        self.ball_in_over = 0;
        let over_number = self.scoreboard.overs;

        if over_number >= self.conditions.total_overs {
            self.events.push(MatchEvent::OverCompleted {
                over_number,
                next_bowler: None,
            });
            self.finish(InningsState::OversComplete);
            return Ok(());
        }

        self.bowler = self.bowlers.choose(rng)?.clone();
        log::debug!(
            "Over {} done at {}/{}, {} to bowl",
            over_number,
            self.scoreboard.runs,
            self.scoreboard.wickets,
            self.bowler.name
        );
        self.events.push(MatchEvent::OverCompleted {
            over_number,
            next_bowler: Some(self.bowler.name.clone()),
        });
        Ok(())
    }

    fn check_wickets(&self) -> Result<()> {
        if self.scoreboard.wickets as usize > self.roster_size {
            return Err(SimError::WicketInvariant {
                team: self.batting_team.clone(),
                wickets: self.scoreboard.wickets,
                roster_size: self.roster_size,
            });
        }
        Ok(())
    }

    fn finish(&mut self, state: InningsState) {
        self.state = state;
        log::info!(
            "{} innings over ({:?}): {}/{} in {} overs",
            self.batting_team,
            state,
            self.scoreboard.runs,
            self.scoreboard.wickets,
            self.scoreboard.overs
        );
        self.events.push(MatchEvent::InningsEnded {
            runs: self.scoreboard.runs,
            wickets: self.scoreboard.wickets,
            overs: self.scoreboard.overs,
        });
    }
}
