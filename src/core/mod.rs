//! Match-wide constants.

pub mod constants;

pub use constants::*;
