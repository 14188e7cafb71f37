//! Display rendering utilities

#[cfg(test)]
mod tests;


use std::borrow::Cow;

use tokio::io;
use tokio_util::codec;

use crate::field::{Field, KeyColour, Tile};
use crate::util;


/// Display handle
///
/// An instance of this type wraps a writer connected to an ANSI terminal
/// and renders field snapshots onto it. Each batch of draw commands is
/// issued with the cursor hidden and leaves the cursor on a resting
/// position below the rendered grid.
///
pub struct Display<W> {
    writer: codec::FramedWrite<W, AnsiEncoder>,
}

impl<W> Display<W>
    where W: io::AsyncWrite + Unpin
{
    /// Create a new Display from the given writer
    ///
    pub fn new(writer: W) -> Self {
        Self {
            writer: codec::FramedWrite::new(writer, AnsiEncoder::new(util::GRID_HEIGHT.into(), 0)),
        }
    }

    /// Clear the entire screen
    ///
    pub async fn clear(&mut self) -> io::Result<()> {
        self.send(std::iter::once(DrawCommand::ClearScreen)).await
    }

    /// Draw a snapshot of the given field
    ///
    /// Every tile is rendered as a cell two terminal columns wide in the
    /// colour associated with its contents. Empty tiles are drawn in
    /// the terminal's default colours, erasing whatever occupied the cell
    /// on the previous frame.
    ///
    pub async fn render(&mut self, field: &Field) -> io::Result<()> {
        let cmds: Vec<_> = field
            .tiles()
            .flat_map(|((row, col), tile)| {
                let cell = DrawCommand::SetPos(
                    usize::from(row) as u16,
                    usize::from(col) as u16 * TILE_COLS,
                );
                vec![cell, SGR::Background(tile_colour(tile)).into(), "  ".into()]
            })
            .collect();
        self.send(cmds).await
    }

    /// Send a sequence of DrawCommands
    ///
    async fn send<'c>(
        &mut self,
        cmds: impl IntoIterator<Item = DrawCommand<'c>>,
    ) -> io::Result<()> {
        use futures::SinkExt;

        self.writer.send(cmds).await
    }
}


/// Width of a single rendered tile in terminal columns
///
const TILE_COLS: u16 = 2;


/// Determine the colour a tile is rendered in
///
/// The function returns `None` for tiles rendered in the terminal's
/// default colours. Stones and crates keep their colour while falling.
///
fn tile_colour(tile: Tile) -> Option<(Colour, Brightness)> {
    match tile {
        Tile::Empty    => None,
        Tile::Rubble   => Some((Colour::Green, Brightness::Light)),
        Tile::Wall     => Some((Colour::Black, Brightness::Light)),
        Tile::Player   => Some((Colour::Red, Brightness::Dark)),
        Tile::Stone(_) => Some((Colour::Blue, Brightness::Dark)),
        Tile::Crate(_) => Some((Colour::Yellow, Brightness::Dark)),
        Tile::Key(KeyColour::A) | Tile::Lock(KeyColour::A) =>
            Some((Colour::Yellow, Brightness::Light)),
        Tile::Key(KeyColour::B) | Tile::Lock(KeyColour::B) =>
            Some((Colour::Cyan, Brightness::Dark)),
    }
}


/// Encoder for sequences of `DrawCommand`s
///
/// This encoder will encode `DrawCommand`s as ANSI escape sequences. Each
/// sequence is enclosed in sequences hiding the cursor while drawing. In
/// addition, the default formatting is restored after each sequence and
/// the cursor is moved to a designated resting position.
///
struct AnsiEncoder {
    resting_row: u16,
    resting_col: u16,
}

impl AnsiEncoder {
    /// Create a new encoder with the given resting position
    ///
    pub fn new(resting_row: u16, resting_col: u16) -> Self {
        Self {resting_row, resting_col}
    }
}

impl<'c, I> codec::Encoder<I> for AnsiEncoder
    where I: IntoIterator<Item = DrawCommand<'c>>
{
    type Error = io::Error;

    fn encode(
        &mut self,
        items: I,
        dst: &mut bytes::BytesMut
    ) -> Result<(), Self::Error> {
        use bytes::BufMut;

        dst.put_slice(b"\x1b[?25l");
        items.into_iter().for_each(|i| i.write_as_ansi(dst));
        DrawCommand::Format(SGR::Reset).write_as_ansi(dst);
        DrawCommand::SetPos(self.resting_row, self.resting_col).write_as_ansi(dst);
        dst.put_slice(b"\x1b[?25h");
        Ok(())
    }
}


/// Representation of a draw command
///
#[derive(Clone, Debug, PartialEq)]
enum DrawCommand<'s> {
    /// Clear the entire screen
    ClearScreen,
    /// Set the cursor's position
    ///
    /// The first component denotes the row, the second one the column. Both
    /// are zero-based, meaning that `0` refers to the first row or column.
    ///
    SetPos(u16, u16),
    /// Select Graphic Rendition
    Format(SGR),
    /// Put text on the screen at the current cursor position
    Text(Cow<'s, str>),
}

impl DrawCommand<'_> {
    /// Write the draw command as an ANSI escape sequence
    ///
    fn write_as_ansi(&self, out: &mut impl bytes::BufMut) {
        match self {
            DrawCommand::ClearScreen   => out.put_slice(b"\x1b[2J"),
            DrawCommand::SetPos(r, c)  => out.put_slice(format!("\x1b[{};{}H", r + 1, c + 1).as_bytes()),
            DrawCommand::Format(param) => out.put_slice(format!("\x1b[{}m", param.code()).as_bytes()),
            DrawCommand::Text(s)       => out.put_slice(s.as_bytes()),
        }
    }
}

impl<'s> From<&'s str> for DrawCommand<'s> {
    fn from(text: &'s str) -> Self {
        Self::Text(text.into())
    }
}

impl From<SGR> for DrawCommand<'_> {
    fn from(param: SGR) -> Self {
        Self::Format(param)
    }
}


/// Representation of some selected "Select Graphic Rendition" parameters
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum SGR {
    /// Reset to default formatting
    Reset,
    /// Set the background colour
    ///
    /// A value of `None` will reset the colour to the default.
    ///
    Background(Option<(Colour, Brightness)>),
}

impl SGR {
    /// Determine the code number for the SGR parameter
    ///
    fn code(&self) -> u8 {
        match self {
            Self::Reset                      =>  0,
            Self::Background(Some((c, b)))   => 40 + c.code_off() + b.code_off(),
            Self::Background(None)           => 49,
        }
    }
}


/// Representation of the basic colours supported by terminals
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Colour {
    /// Determine the code offset corresponding to the colour
    ///
    fn code_off(&self) -> u8 {
        match self {
            Self::Black  => 0,
            Self::Red    => 1,
            Self::Green  => 2,
            Self::Yellow => 3,
            Self::Blue   => 4,
            Self::Cyan   => 6,
        }
    }
}


/// Representation of brightness
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum Brightness {
    Dark,
    Light,
}

impl Brightness {
    /// Determine the code offset corresponding to the brightness
    ///
    fn code_off(&self) -> u8 {
        match self {
            Self::Dark  =>  0,
            Self::Light => 60,
        }
    }
}
