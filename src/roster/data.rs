//! Built-in rosters and ground used when no setup file is given.

use super::types::{Field, MatchSetup, Player, Team};
use crate::core::constants::DEFAULT_TOTAL_OVERS;

/// (name, bowling, batting, fielding, running, experience)
type PlayerRow = (&'static str, f64, f64, f64, f64, f64);

const CSK_PLAYERS: [PlayerRow; 11] = [
    ("MS Dhoni", 0.2, 0.8, 0.99, 0.8, 0.9),
    ("Virat Kohli", 0.1, 0.9, 0.95, 0.85, 0.95),
    ("Rohit Sharma", 0.3, 0.85, 0.9, 0.82, 0.88),
    ("AB de Villiers", 0.1, 0.92, 0.92, 0.88, 0.87),
    ("Kane Williamson", 0.85, 0.85, 0.88, 0.8, 0.92),
    ("Joe Root", 0.7, 0.87, 0.87, 0.78, 0.86),
    ("Steve Smith", 0.3, 0.88, 0.89, 0.81, 0.89),
    ("David Warner", 0.2, 0.9, 0.85, 0.83, 0.87),
    ("Jasprit Bumrah", 0.9, 0.1, 0.8, 0.7, 0.82),
    ("Mitchell Starc", 0.85, 0.1, 0.75, 0.7, 0.84),
    ("Rashid Khan", 0.8, 0.1, 0.7, 0.75, 0.81),
];

const MI_PLAYERS: [PlayerRow; 11] = [
    ("Ben Stokes", 0.7, 0.78, 0.85, 0.85, 0.85),
    ("Shakib Al Hasan", 0.85, 0.77, 0.88, 0.8, 0.83),
    ("Kagiso Rabada", 0.9, 0.1, 0.78, 0.75, 0.86),
    ("Chris Gayle", 0.1, 0.9, 0.7, 0.7, 0.78),
    ("Andre Russell", 0.7, 0.7, 0.8, 0.8, 0.75),
    ("Faf du Plessis", 0.3, 0.78, 0.86, 0.75, 0.83),
    ("Quinton de Kock", 0.3, 0.82, 0.85, 0.8, 0.81),
    ("Babar Azam", 0.1, 0.85, 0.82, 0.8, 0.84),
    ("Eoin Morgan", 0.4, 0.8, 0.83, 0.75, 0.87),
    ("Dwayne Bravo", 0.8, 0.89, 0.81, 0.72, 0.80),
    ("Yuvi Singh", 0.7, 0.87, 0.82, 0.74, 0.86),
];

fn build_team(name: &str, rows: &[PlayerRow]) -> Team {
    let players = rows
        .iter()
        .map(|&(name, bowling, batting, fielding, running, experience)| {
            Player::new(name, bowling, batting, fielding, running, experience)
        })
        .collect();
    Team::new(name, players)
}

pub fn default_home_team() -> Team {
    build_team("CSK", &CSK_PLAYERS)
}

pub fn default_away_team() -> Team {
    build_team("MI", &MI_PLAYERS)
}

pub fn default_field() -> Field {
    Field::new("Large", 0.7, 0.8, 0.9)
}

pub fn default_setup() -> MatchSetup {
    MatchSetup {
        home: default_home_team(),
        away: default_away_team(),
        field: default_field(),
        total_overs: Some(DEFAULT_TOTAL_OVERS),
    }
}
