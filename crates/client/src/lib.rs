//! Line-based terminal client for Mystic Dice Adventure.
//!
//! The client only talks to the public `mystic-core` API: it builds a
//! [`GameSession`](mystic_core::GameSession), feeds it player commands
//! through a [`TurnEngine`](mystic_core::TurnEngine) and prints the
//! narration each operation returns. Narration goes to stdout, logs to
//! stderr.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::ClientConfig;
