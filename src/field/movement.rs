//! Movement resolution for the player avatar

use crate::util;

use super::tile::Tile;
use super::{Field, LayoutError};


/// Handle tracking the player's position
///
/// A value of this type mirrors the position of the single [Tile::Player]
/// on the field, sparing a full grid scan on every move. All movement goes
/// through this handle, which keeps the mirror in sync.
///
pub struct Avatar {
    pos: util::Position,
}

impl Avatar {
    /// Locate the player on the given field
    ///
    /// This function scans the entire field once. It fails unless the field
    /// holds exactly one player tile.
    ///
    pub fn locate(field: &Field) -> Result<Self, LayoutError> {
        let mut players = field.tiles().filter(|(_, tile)| *tile == Tile::Player);
        let res = players.next().map(|(pos, _)| Self {pos}).ok_or(LayoutError::NoPlayer)?;
        match players.next() {
            Some((pos, _)) => Err(LayoutError::ExtraPlayer(pos)),
            None => Ok(res),
        }
    }

    /// Apply a single directional command
    ///
    /// A command which cannot be carried out is dropped silently, leaving
    /// both the field and the avatar untouched. No feedback of any kind is
    /// given for blocked moves.
    ///
    pub fn apply(&mut self, field: &mut Field, command: util::Direction) {
        match command {
            util::Direction::Left | util::Direction::Right => self.move_horizontal(field, command),
            util::Direction::Up | util::Direction::Down => self.move_vertical(field, command),
        }
    }

    /// Retrieve the avatar's current position
    ///
    pub fn position(&self) -> util::Position {
        self.pos
    }

    /// Resolve a horizontal movement command
    ///
    /// In addition to stepping onto passable tiles and collecting keys, a
    /// horizontal move may push a resting stone or crate: the pushed tile
    /// moves one step further in the same direction, provided that tile is
    /// empty and the pushed object would come to rest on solid support. A
    /// push into open space is refused outright.
    ///
    fn move_horizontal(&mut self, field: &mut Field, dir: util::Direction) {
        let dest = match self.pos + dir {
            Some(dest) => dest,
            None => return,
        };

        match field[dest] {
            tile if tile.is_passable() => self.step(field, dest),
            tile if tile.is_pushable() => {
                let supported = (dest + util::Direction::Down)
                    .map(|below| field[below] != Tile::Empty)
                    .unwrap_or(true);
                let target = (dest + dir)
                    .filter(|target| field[*target] == Tile::Empty)
                    .filter(|_| supported);
                if let Some(target) = target {
                    field[target] = tile;
                    self.step(field, dest)
                }
            },
            Tile::Key(colour) => {
                field.clear_all(Tile::Lock(colour));
                self.step(field, dest)
            },
            _ => (),
        }
    }

    /// Resolve a vertical movement command
    ///
    /// Stones and crates are never pushed vertically. The asymmetry with
    /// horizontal movement is intended: the player can neither lift objects
    /// nor shove them into the ground.
    ///
    fn move_vertical(&mut self, field: &mut Field, dir: util::Direction) {
        let dest = match self.pos + dir {
            Some(dest) => dest,
            None => return,
        };

        match field[dest] {
            tile if tile.is_passable() => self.step(field, dest),
            Tile::Key(colour) => {
                field.clear_all(Tile::Lock(colour));
                self.step(field, dest)
            },
            _ => (),
        }
    }

    /// Move the avatar onto the given tile
    ///
    /// The source tile becomes empty, the destination tile becomes the
    /// player tile and the tracked position is updated.
    ///
    fn step(&mut self, field: &mut Field, dest: util::Position) {
        field[self.pos] = Tile::Empty;
        field[dest] = Tile::Player;
        self.pos = dest;
    }
}
