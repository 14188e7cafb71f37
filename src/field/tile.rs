//! Types representing the contents of individual tiles


/// Contents of a single tile
///
/// The cell vocabulary is a closed set. All simulation rules match on it
/// exhaustively, so adding a variant forces every rule to take a stance.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Nothing at all, stones and crates fall into it
    Empty,
    /// Loose filler matter the player may walk over
    Rubble,
    /// Immovable wall
    Wall,
    /// The player marker
    Player,
    /// A stone, solid and subject to gravity
    Stone(Motion),
    /// A pushable crate, solid and subject to gravity
    Crate(Motion),
    /// A key, opening all locks of the same colour when picked up
    Key(KeyColour),
    /// A lock, impassable until the matching key is collected
    Lock(KeyColour),
}

impl Tile {
    /// Check whether the player may step onto this tile
    ///
    pub fn is_passable(self) -> bool {
        matches!(self, Self::Empty | Self::Rubble)
    }

    /// Check whether the player may push this tile aside
    ///
    /// Only resting stones and crates yield to a push. A falling one passes
    /// the player by.
    ///
    pub fn is_pushable(self) -> bool {
        matches!(self, Self::Stone(Motion::Resting) | Self::Crate(Motion::Resting))
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}


/// Motion state of a stone or crate
///
/// The falling state is transient: it marks a tile which moved down during
/// the current settle pass and reverts to resting as soon as the tile finds
/// support.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    Resting,
    Falling,
}


/// Colour pairing a key with the locks it opens
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyColour {
    A,
    B,
}
