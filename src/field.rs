//! Grid model and simulation resolvers

mod gravity;
mod movement;
mod tile;



use std::error::Error;
use std::fmt;

use crate::util;

pub use gravity::settle;
pub use movement::Avatar;
pub use tile::{KeyColour, Motion, Tile};


/// A start layout, given as rows from top to bottom
///
pub type Layout = [[Tile; util::GRID_WIDTH as usize]; util::GRID_HEIGHT as usize];


/// The play field
///
/// The field maps every position of the grid to a [Tile]. Tiles are stored
/// row-major in a single flat array and accessed by [util::Position]. The
/// dimensions are fixed for the entire session; a tile is never removed or
/// added, only reassigned.
///
pub struct Field {
    tiles: [Tile; TILE_COUNT],
}

impl Field {
    /// Create a field from the given start layout
    ///
    /// The entire rim of a layout must consist of [Tile::Wall]. Since walls
    /// never move, fall or yield, this guarantees that the resolvers only
    /// ever touch tiles within the grid. A layout violating this constraint
    /// is refused with a [LayoutError].
    ///
    pub fn new(layout: Layout) -> Result<Self, LayoutError> {
        let mut tiles = [Tile::Empty; TILE_COUNT];
        tiles
            .iter_mut()
            .zip(layout.iter().flatten())
            .for_each(|(tile, source)| *tile = *source);

        let field = Self {tiles};
        let open = field.tiles().find(|(pos, tile)| is_rim(*pos) && *tile != Tile::Wall);
        match open {
            Some((pos, _)) => Err(LayoutError::OpenBorder(pos)),
            None => Ok(field),
        }
    }

    /// Retrieve an iterator over all tiles and their positions
    ///
    /// Positions are yielded row by row from the top, and from left to right
    /// within each row.
    ///
    pub fn tiles(&self) -> impl Iterator<Item = (util::Position, Tile)> + '_ {
        util::ROWS.flat_map(util::complete_row).map(move |pos| (pos, self[pos]))
    }

    /// Replace every tile of the given kind with [Tile::Empty]
    ///
    pub fn clear_all(&mut self, kind: Tile) {
        self.tiles.iter_mut().filter(|tile| **tile == kind).for_each(|tile| *tile = Tile::Empty)
    }

    /// Compute the flat array index for a position
    ///
    fn offset((row, col): util::Position) -> usize {
        usize::from(row) * usize::from(util::GRID_WIDTH) + usize::from(col)
    }
}

impl std::ops::IndexMut<util::Position> for Field {
    fn index_mut(&mut self, index: util::Position) -> &mut Self::Output {
        &mut self.tiles[Self::offset(index)]
    }
}

impl std::ops::Index<util::Position> for Field {
    type Output = Tile;

    fn index(&self, index: util::Position) -> &Self::Output {
        &self.tiles[Self::offset(index)]
    }
}


/// Check whether a position lies on the outermost rim of the grid
///
fn is_rim((row, col): util::Position) -> bool {
    row == util::RowIndex::TOP_ROW || row == util::RowIndex::BOTTOM_ROW ||
        col == util::ColumnIndex::LEFTMOST_COLUMN || col == util::ColumnIndex::RIGHTMOST_COLUMN
}


/// Number of tiles on the field
///
const TILE_COUNT: usize = util::GRID_WIDTH as usize * util::GRID_HEIGHT as usize;


/// Error indicating an unusable start layout
///
#[derive(Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A tile on the rim of the grid is not a wall
    OpenBorder(util::Position),
    /// The layout does not contain a player tile
    NoPlayer,
    /// The layout contains more than one player tile
    ExtraPlayer(util::Position),
}

impl Error for LayoutError {}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenBorder((row, col)) => write!(
                f,
                "border tile at row {}, column {} is not a wall",
                usize::from(*row),
                usize::from(*col),
            ),
            Self::NoPlayer => write!(f, "layout contains no player tile"),
            Self::ExtraPlayer((row, col)) => write!(
                f,
                "layout contains an additional player tile at row {}, column {}",
                usize::from(*row),
                usize::from(*col),
            ),
        }
    }
}
