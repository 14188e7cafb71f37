//! Gravity resolution for stones and crates

use crate::util;

use super::tile::{Motion, Tile};
use super::Field;


/// Let unsupported stones and crates fall one tile
///
/// This function performs a single settle pass over the entire field. A
/// stone or crate with an empty tile below moves down one row and enters
/// the falling state. A falling tile which did not move during the pass
/// has found support and comes to rest again.
///
/// Rows are processed from the bottom up and from left to right within
/// each row. Since a moving tile is always written one row below the row
/// currently under inspection, the bottom-up order ensures it is not
/// visited a second time within the same pass, and a whole column of
/// falling objects advances together.
///
pub fn settle(field: &mut Field) {
    util::ROWS
        .rev()
        .flat_map(util::complete_row)
        .for_each(|pos| {
            let below = (pos + util::Direction::Down).filter(|below| field[*below] == Tile::Empty);
            match (field[pos], below) {
                (Tile::Stone(_), Some(below)) => {
                    field[below] = Tile::Stone(Motion::Falling);
                    field[pos] = Tile::Empty;
                },
                (Tile::Crate(_), Some(below)) => {
                    field[below] = Tile::Crate(Motion::Falling);
                    field[pos] = Tile::Empty;
                },
                (Tile::Stone(Motion::Falling), None) => field[pos] = Tile::Stone(Motion::Resting),
                (Tile::Crate(Motion::Falling), None) => field[pos] = Tile::Crate(Motion::Resting),
                _ => (),
            }
        })
}
