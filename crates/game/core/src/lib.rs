//! Turn and event resolution for the Mystic Dice Adventure board game.
//!
//! `mystic-core` holds the rules: players race along a linear track of
//! tiles, each landing draws a randomized effect scaled by difficulty, class
//! spells and passives bend those effects, and the first player to beat the
//! final challenge wins. Rendering and input belong to a presentation layer;
//! this crate exposes plain data and synchronous operations.
//!
//! All randomness is injected through [`RandomSource`], so a seeded source
//! replays a game exactly. All mutation after setup flows through
//! [`engine::TurnEngine`].
//!
//! ```
//! use mystic_core::{Difficulty, GameSession, PcgRng, PlayerClass, PlayerSetup};
//!
//! let mut rng = PcgRng::new(7);
//! let players = [
//!     PlayerSetup::new("Aria", PlayerClass::Mage),
//!     PlayerSetup::new("Brom", PlayerClass::Tank),
//! ];
//! let mut session = GameSession::start(&players, Difficulty::Medium, 40, &mut rng).unwrap();
//!
//! let outcome = session.engine(&mut rng).request_roll().unwrap();
//! for event in &outcome.events {
//!     println!("{event}");
//! }
//! ```
pub mod ability;
pub mod board;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod player;
pub mod resolve;
pub mod rng;
pub mod session;

pub use board::{TileBoard, TileCategory};
pub use catalog::{Effect, EffectDescriptor};
pub use config::{Difficulty, DifficultySettings, GameConfig};
pub use engine::{EngineAction, GameStatus, TurnEngine, TurnError, TurnOutcome};
pub use error::{AbilityError, ErrorSeverity, GameError, ValidationError};
pub use events::TurnEvent;
pub use player::{Player, PlayerClass, PlayerSetup};
pub use rng::{PcgRng, RandomSource, SequenceRng};
pub use session::{GameOutcome, GameSession, PendingEvent, SessionSnapshot, TurnPhase};
