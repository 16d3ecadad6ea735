//! Match runner for Lines of Action players
//!
//! This crate provides infrastructure for:
//! - Playing head-to-head matches between two `Engine` implementations
//! - Recording win/loss/draw results as JSON reports
//! - Loading match settings from a TOML config file
//!
//! # Usage
//!
//! ```bash
//! # Play the searching player against the random baseline
//! cargo run -p tournament -- match machine random --games 20 --depth 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
