//! Match report generation.

use crate::commentary;
use crate::engine::{InningsState, InningsSummary, MatchRecord, MatchResult};
use crate::error::Result;
use crate::roster::Field;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A finished match plus what is needed to reproduce it.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub field: Field,
    pub record: MatchRecord,
}

impl SimReport {
    pub fn new(seed: u64, field: Field, record: MatchRecord) -> Self {
        Self {
            seed,
            field,
            record,
        }
    }

    /// Ball-by-ball narration followed by the summary.
    pub fn to_text(&self) -> String {
        let mut report = commentary::narrate(&self.record.events);
        report.push_str("\n\n");
        report.push_str(&self.summary_text());
        report
    }

    /// Scorecard and result only.
    pub fn summary_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                        MATCH SUMMARY\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "  Seed:       {}\n  Ground:     {} (pitch {:.2})\n  Overs:      {}\n\n",
            self.seed, self.field.size, self.field.pitch_conditions, self.record.total_overs
        ));

        report.push_str("── INNINGS ──────────────────────────────────────────────────────\n");
        for innings in [&self.record.first_innings, &self.record.second_innings] {
            report.push_str(&innings_line(innings));
        }
        report.push('\n');

        report.push_str("── RESULT ───────────────────────────────────────────────────────\n");
        match &self.record.result {
            MatchResult::Win {
                winner,
                loser,
                margin,
            } => report.push_str(&format!(
                "  {} beat {} by {} run{}\n",
                winner,
                loser,
                margin,
                if *margin == 1 { "" } else { "s" }
            )),
            MatchResult::Tie { runs } => {
                report.push_str(&format!("  Match tied, both sides on {}\n", runs))
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Write the JSON report into `dir` under a timestamped name.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf> {
        let filename = format!(
            "match_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(filename);
        fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

fn innings_line(innings: &InningsSummary) -> String {
    let ending = match innings.ended_by {
        InningsState::AllOut => "all out",
        InningsState::OversComplete => "overs complete",
        InningsState::BallInPlay => "in progress",
    };
    format!(
        "  {:<12} {:>4}/{:<2} ({} ov, {} balls, {})\n",
        innings.batting_team,
        innings.runs,
        innings.wickets,
        innings.overs,
        innings.balls_faced,
        ending
    )
}
