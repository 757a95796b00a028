//! The linear track players race along.

use crate::config::GameConfig;
use crate::error::ValidationError;
use crate::rng::RandomSource;

/// Kind of a board tile; decides which effect table a landing draws from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileCategory {
    Start,
    Final,
    Danger,
    Healing,
    Mystery,
    Comedy,
    #[strum(serialize = "goback")]
    #[cfg_attr(feature = "serde", serde(rename = "goback"))]
    GoBack,
}

impl TileCategory {
    /// Categories interior tiles are drawn from, in draw order.
    pub const RANDOMIZABLE: [TileCategory; 5] = [
        TileCategory::Danger,
        TileCategory::Healing,
        TileCategory::Mystery,
        TileCategory::Comedy,
        TileCategory::GoBack,
    ];

    /// Heading a presentation layer shows for an event on this tile.
    pub const fn title(self) -> &'static str {
        match self {
            TileCategory::Start => "Start",
            TileCategory::Final => "Final Challenge",
            TileCategory::Danger => "Danger!",
            TileCategory::Healing => "Healing",
            TileCategory::Mystery => "Mystery",
            TileCategory::Comedy => "Comedy Event",
            TileCategory::GoBack => "Cursed Tile",
        }
    }

    pub const fn is_randomizable(self) -> bool {
        !matches!(self, TileCategory::Start | TileCategory::Final)
    }
}

/// Fixed sequence of tile categories, generated once per game.
///
/// Index 0 is always [`TileCategory::Start`] and the last index is always
/// [`TileCategory::Final`].
///
/// Serialized as the bare tile list; deserializing runs the same layout
/// checks as [`TileBoard::from_tiles`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TileCategory>", into = "Vec<TileCategory>")
)]
pub struct TileBoard {
    tiles: Vec<TileCategory>,
}

impl TryFrom<Vec<TileCategory>> for TileBoard {
    type Error = ValidationError;

    fn try_from(tiles: Vec<TileCategory>) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<TileBoard> for Vec<TileCategory> {
    fn from(board: TileBoard) -> Self {
        board.tiles
    }
}

impl TileBoard {
    /// Generate a board of `size` tiles, drawing every interior tile uniformly
    /// from [`TileCategory::RANDOMIZABLE`].
    pub fn generate(size: usize, rng: &mut dyn RandomSource) -> Result<Self, ValidationError> {
        Self::check_size(size)?;

        let mut tiles = Vec::with_capacity(size);
        tiles.push(TileCategory::Start);
        for _ in 1..size - 1 {
            let index = rng.pick(TileCategory::RANDOMIZABLE.len());
            tiles.push(TileCategory::RANDOMIZABLE[index]);
        }
        tiles.push(TileCategory::Final);

        Ok(Self { tiles })
    }

    /// Build a board from an explicit layout (fixtures, replays).
    ///
    /// The first tile must be `start` and the last `final`; interior tiles
    /// must be randomizable categories.
    pub fn from_tiles(tiles: Vec<TileCategory>) -> Result<Self, ValidationError> {
        Self::check_size(tiles.len())?;

        let last = tiles.len() - 1;
        for (index, &category) in tiles.iter().enumerate() {
            let expected = match index {
                0 => TileCategory::Start,
                i if i == last => TileCategory::Final,
                _ if category.is_randomizable() => continue,
                _ => {
                    return Err(ValidationError::InvalidBoardLayout {
                        index,
                        expected: "an interior category",
                    });
                }
            };
            if category != expected {
                return Err(ValidationError::InvalidBoardLayout {
                    index,
                    expected: if index == 0 { "start" } else { "final" },
                });
            }
        }

        Ok(Self { tiles })
    }

    fn check_size(size: usize) -> Result<(), ValidationError> {
        if size < GameConfig::MIN_BOARD_SIZE {
            return Err(ValidationError::BoardTooSmall {
                size,
                required: GameConfig::MIN_BOARD_SIZE,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; boards hold at least two tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn final_index(&self) -> usize {
        self.tiles.len() - 1
    }

    pub fn category(&self, position: usize) -> Option<TileCategory> {
        self.tiles.get(position).copied()
    }

    pub fn tiles(&self) -> &[TileCategory] {
        &self.tiles
    }

    /// Clamp a signed position onto the track.
    pub fn clamp(&self, position: i64) -> usize {
        position.clamp(0, self.final_index() as i64) as usize
    }
}
