//! Top-level game state container.
//!
//! A [`GameSession`] owns everything about one game: difficulty, board,
//! players, whose turn it is and any tile effect awaiting a passive decision.
//! There is no global state; dropping the session ends the game and calling
//! [`GameSession::start`] again starts a new one.

use crate::board::{TileBoard, TileCategory};
use crate::catalog::Effect;
use crate::config::{Difficulty, GameConfig};
use crate::engine::TurnEngine;
use crate::error::ValidationError;
use crate::player::{Player, PlayerSetup};
use crate::rng::RandomSource;

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum GameOutcome {
    /// The player at `winner` passed the final challenge.
    Victory { winner: usize },
    /// Every player was eliminated.
    AllFallen,
}

/// Decision point the session is waiting on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "phase", rename_all = "snake_case"))]
pub enum TurnPhase {
    /// Current player may cast a spell or roll.
    #[default]
    AwaitingRoll,
    /// A landed-on effect is deferred until the player uses or skips a passive.
    AwaitingPassiveChoice,
    GameOver(GameOutcome),
}

impl TurnPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll => "awaiting_roll",
            TurnPhase::AwaitingPassiveChoice => "awaiting_passive_choice",
            TurnPhase::GameOver(_) => "game_over",
        }
    }
}

/// Tile effect deferred for a passive-skip decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingEvent {
    pub player_index: usize,
    /// Already scaled for difficulty.
    pub effect: Effect,
    pub tile_category: TileCategory,
}

/// Owned copy of everything a presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub difficulty: Difficulty,
    pub board: TileBoard,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub pending_event: Option<PendingEvent>,
    pub phase: TurnPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) difficulty: Difficulty,
    pub(crate) board: TileBoard,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) phase: TurnPhase,
    pub(crate) pending_event: Option<PendingEvent>,
}

impl GameSession {
    /// Start a new game.
    ///
    /// Entries with a blank name are ignored. Each player gets the
    /// difficulty's max HP and its class's passive budget; the board is
    /// generated from `rng`; the first player acts first.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InsufficientPlayers`] with fewer than two named entries
    /// - [`ValidationError::BoardTooSmall`] when `board_size < 2`
    ///
    /// Validation happens before any random value is drawn.
    pub fn start(
        players: &[PlayerSetup],
        difficulty: Difficulty,
        board_size: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, ValidationError> {
        let roster = Self::roster(players, difficulty)?;
        let board = TileBoard::generate(board_size, rng)?;
        Ok(Self::assemble(roster, difficulty, board))
    }

    /// Start a game from a loaded configuration.
    pub fn from_config(
        players: &[PlayerSetup],
        config: &GameConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, ValidationError> {
        Self::start(players, config.difficulty, config.board_size, rng)
    }

    /// Start a game on a prepared board (fixtures, replays).
    ///
    /// The board layout is checked again, so a board built by any route
    /// must have a start tile, a final tile and randomizable interior.
    pub fn with_board(
        players: &[PlayerSetup],
        difficulty: Difficulty,
        board: TileBoard,
    ) -> Result<Self, ValidationError> {
        let roster = Self::roster(players, difficulty)?;
        let board = TileBoard::from_tiles(board.into())?;
        Ok(Self::assemble(roster, difficulty, board))
    }

    fn roster(
        players: &[PlayerSetup],
        difficulty: Difficulty,
    ) -> Result<Vec<Player>, ValidationError> {
        let roster: Vec<Player> = players
            .iter()
            .filter(|setup| !setup.name.trim().is_empty())
            .map(|setup| Player::from_setup(setup, difficulty))
            .collect();

        if roster.len() < GameConfig::MIN_PLAYERS {
            return Err(ValidationError::InsufficientPlayers {
                found: roster.len(),
                required: GameConfig::MIN_PLAYERS,
            });
        }
        Ok(roster)
    }

    fn assemble(players: Vec<Player>, difficulty: Difficulty, board: TileBoard) -> Self {
        tracing::info!(
            players = players.len(),
            %difficulty,
            board_size = board.len(),
            "game session started"
        );
        Self {
            difficulty,
            board,
            players,
            current: 0,
            phase: TurnPhase::AwaitingRoll,
            pending_event: None,
        }
    }

    /// Drive the session with the given random source.
    pub fn engine<'a>(&'a mut self, rng: &'a mut dyn RandomSource) -> TurnEngine<'a> {
        TurnEngine::new(self, rng)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn pending_event(&self) -> Option<&PendingEvent> {
        self.pending_event.as_ref()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            TurnPhase::GameOver(GameOutcome::Victory { winner }) => self.players.get(winner),
            _ => None,
        }
    }

    pub fn alive_players(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_alive())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            difficulty: self.difficulty,
            board: self.board.clone(),
            players: self.players.clone(),
            current_player: self.current,
            pending_event: self.pending_event,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerClass;
    use crate::rng::{PcgRng, SequenceRng};

    fn roster() -> Vec<PlayerSetup> {
        vec![
            PlayerSetup::new("Ada", PlayerClass::Warrior),
            PlayerSetup::new("   ", PlayerClass::Mage),
            PlayerSetup::new("Bo", PlayerClass::Healer),
        ]
    }

    #[test]
    fn start_skips_blank_names() {
        let session =
            GameSession::start(&roster(), Difficulty::Easy, 40, &mut PcgRng::new(1)).unwrap();

        assert_eq!(session.players().len(), 2);
        assert_eq!(session.players()[1].name, "Bo");
        assert_eq!(session.players()[1].passive_count, 2);
        assert!(session.players().iter().all(|p| p.max_hp == 150));
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(session.board().len(), 40);
    }

    #[test]
    fn start_requires_two_named_players() {
        let setups = vec![
            PlayerSetup::new("Solo", PlayerClass::Tank),
            PlayerSetup::new("", PlayerClass::Mage),
        ];
        let mut rng = SequenceRng::new([0]);

        let err = GameSession::start(&setups, Difficulty::Medium, 40, &mut rng).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InsufficientPlayers {
                found: 1,
                required: 2
            }
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn start_rejects_tiny_boards() {
        let err =
            GameSession::start(&roster(), Difficulty::Medium, 1, &mut PcgRng::new(1)).unwrap_err();
        assert!(matches!(err, ValidationError::BoardTooSmall { size: 1, .. }));
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let session =
            GameSession::start(&roster(), Difficulty::Hard, 12, &mut PcgRng::new(9)).unwrap();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.players, session.players());
        assert_eq!(snapshot.board.len(), 12);
        assert_eq!(snapshot.current_player, 0);
        assert_eq!(snapshot.pending_event, None);
        assert_eq!(snapshot.phase, TurnPhase::AwaitingRoll);
    }

    #[test]
    fn alive_players_excludes_eliminated() {
        let mut session =
            GameSession::start(&roster(), Difficulty::Medium, 40, &mut PcgRng::new(1)).unwrap();
        session.players[0].hp = 0;

        let alive: Vec<usize> = session.alive_players().map(|(i, _)| i).collect();
        assert_eq!(alive, vec![1]);
        assert!(!session.is_over());
        assert!(session.winner().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_to_json() {
        let session =
            GameSession::start(&roster(), Difficulty::Medium, 5, &mut SequenceRng::new([4]))
                .unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["phase"]["phase"], "awaiting_roll");
        assert_eq!(json["board"][1], "goback");
        assert_eq!(json["players"][0]["class"], "warrior");
    }
}
