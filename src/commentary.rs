//! Text narration of match events.

use crate::engine::{MatchEvent, Outcome};

const RULE: &str = "---------------------------------------------";

/// Narration lines for a single event.
pub fn describe(event: &MatchEvent) -> Vec<String> {
    match event {
        MatchEvent::GameStarted {
            team_a,
            team_b,
            captain_a,
            captain_b,
            total_overs,
        } => vec![
            "--------- Game Information ---------".to_string(),
            format!("{} Vs {}", team_a, team_b),
            format!("Captain 1 : {}, Captain 2 : {}", captain_a, captain_b),
            format!("Overs : {}", total_overs),
            RULE.to_string(),
        ],
        MatchEvent::InningsStarted { batting_team } => vec![
            "------------- INNINGS STARTED ---------------".to_string(),
            format!("Team {} batting:", batting_team),
        ],
        MatchEvent::BallResolved {
            ball_in_over,
            over,
            batter,
            bowler,
            outcome,
            runs,
            score,
            wickets,
            overs,
        } => {
            let call = match outcome {
                Outcome::Dismissed => format!("{} is OUT!", batter),
                Outcome::Survived => format!("{} plays the shot for {}.", batter, runs),
            };
            vec![
                format!("{}.{} {} to {}: {}", over, ball_in_over, bowler, batter, call),
                format!(
                    "Balls: {} Over: {} Run: {}  Wicket: {}",
                    ball_in_over, overs, score, wickets
                ),
            ]
        }
        MatchEvent::WicketFallen { new_batter } => match new_batter {
            Some(name) => vec![format!("New player {} is playing...", name)],
            None => vec!["All out!".to_string()],
        },
        MatchEvent::OverCompleted {
            over_number,
            next_bowler,
        } => match next_bowler {
            Some(bowler) => vec![format!(
                "Over {} complete. {} to bowl over {}.",
                over_number,
                bowler,
                over_number + 1
            )],
            None => vec![format!("Over {} complete.", over_number)],
        },
        MatchEvent::InningsEnded {
            runs,
            wickets,
            overs,
        } => vec![
            format!(
                "Batting team score --- Runs: {} Wickets: {} in Overs: {}",
                runs, wickets, overs
            ),
            RULE.to_string(),
        ],
        MatchEvent::MatchEnded { winner, margin } => {
            let line = match winner {
                Some(team) => format!("TEAM : {} WON BY {} RUNS", team, margin),
                None => "MATCH TIED".to_string(),
            };
            vec![
                "--------------- Result ----------------------".to_string(),
                line,
                RULE.to_string(),
            ]
        }
    }
}

/// Whole-match narration, one line per entry.
pub fn narrate<'a>(events: impl IntoIterator<Item = &'a MatchEvent>) -> String {
    events
        .into_iter()
        .flat_map(describe)
        .collect::<Vec<_>>()
        .join("\n")
}
