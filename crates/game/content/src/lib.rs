//! File-backed game setup.
//!
//! This crate reads TOML setup files into `mystic-core` configuration and
//! player rosters. Content is consumed when a session starts and never
//! appears in game state.

pub mod loaders;

pub use loaders::{LoadResult, SessionSetup, SetupLoader};
