//! Pac-Man game library crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod highscore;
pub mod input;
pub mod leaderboard;
pub mod map;
pub mod round;
pub mod systems;
pub mod timing;
