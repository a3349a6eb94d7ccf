// Over structure
pub const BALLS_PER_OVER: u32 = 6;
pub const DEFAULT_TOTAL_OVERS: u32 = 2;

// Runs off the bat are drawn from 0..=MAX_RUNS_PER_BALL
pub const MAX_RUNS_PER_BALL: u32 = 6;

// Player skill scalars and pitch conditions live in this range
pub const SKILL_MIN: f64 = 0.0;
pub const SKILL_MAX: f64 = 1.0;
