//! Who bats next and who can bowl.

use crate::error::{Result, RosterRole, SimError};
use crate::roster::Player;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Players yet to bat, in roster order.
#[derive(Debug, Clone, Default)]
pub struct BattingOrder {
    queue: VecDeque<Player>,
}

impl BattingOrder {
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            queue: players.into_iter().collect(),
        }
    }

    /// Next batter, or `None` once everyone has batted (all out).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Player> {
        self.queue.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// The bowling side's players. Any of them may bowl any over, including
/// consecutive ones.
#[derive(Debug, Clone)]
pub struct BowlerPool {
    team: String,
    bowlers: Vec<Player>,
}

impl BowlerPool {
    pub fn new(team: impl Into<String>, bowlers: Vec<Player>) -> Self {
        Self {
            team: team.into(),
            bowlers,
        }
    }

    /// Uniform draw over the whole pool.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Result<&Player> {
        self.bowlers
            .choose(rng)
            .ok_or_else(|| SimError::NoActorsAvailable {
                team: self.team.clone(),
                role: RosterRole::Bowling,
            })
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}
