//! Game loop, tick orchestration and input plumbing



use std::time::Duration;

use futures::StreamExt;
use tokio::io;
use tokio::sync::mpsc;
use tokio::time;
use tokio_util::codec;

use crate::display;
use crate::error::TryExt;
use crate::field::{self, Avatar, Field};
use crate::util::Direction;


/// Run the game until the process is interrupted
///
/// This function drives the simulation at `tick_rate` ticks per second.
/// Each firing of the timer advances the simulation by one [tick] and
/// redraws the field on `out`. Both the field and the display are confined
/// to this task, so a redraw never observes a partially updated field.
///
/// The function returns when Ctrl-C is received.
///
pub async fn run(
    mut field: Field,
    mut avatar: Avatar,
    mut commands: mpsc::UnboundedReceiver<Direction>,
    tick_rate: u32,
    out: impl io::AsyncWrite + Unpin,
) -> io::Result<()> {
    let mut display = display::Display::new(out);
    display.clear().await?;

    let mut timer = time::interval(Duration::from_secs(1) / tick_rate);
    loop {
        tokio::select! {
            _ = timer.tick() => {
                tick(&mut field, &mut avatar, &mut commands);
                display.render(&field).await?;
            },
            res = tokio::signal::ctrl_c() => return res,
        }
    }
}


/// Advance the simulation by one step
///
/// This function drains the pending command queue, applying each command in
/// arrival order, and then runs exactly one settle pass. Gravity does not
/// depend on input: a tick with an empty queue still settles the field.
///
pub fn tick(
    field: &mut Field,
    avatar: &mut Avatar,
    commands: &mut mpsc::UnboundedReceiver<Direction>,
) {
    while let Ok(command) = commands.try_recv() {
        avatar.apply(field, command)
    }
    field::settle(field)
}


/// Forward directional commands from `input` to the given queue
///
/// This function reads raw bytes from `input`, decodes them via a
/// [KeyDecoder] and appends every decoded command to the queue. It returns
/// once the input source or the queue is closed.
///
pub async fn read_commands(
    input: impl io::AsyncRead + Unpin,
    queue: mpsc::UnboundedSender<Direction>,
) {
    let mut keys = codec::FramedRead::new(input, KeyDecoder::default());
    while let Some(key) = keys.next().await {
        let forwarded = key
            .or_err("Could not read key input")
            .and_then(|key| queue.send(key).or_warn("Command queue closed"));
        if forwarded.is_none() {
            break
        }
    }
}


/// Decoder for directional key presses
///
/// The decoder understands `w`, `a`, `s` and `d` in either case as well as
/// the ANSI escape sequences emitted for the arrow keys. Any other input is
/// discarded silently.
///
#[derive(Default)]
pub struct KeyDecoder {}

impl codec::Decoder for KeyDecoder {
    type Item = Direction;
    type Error = io::Error;

    fn decode(
        &mut self,
        src: &mut bytes::BytesMut
    ) -> Result<Option<Self::Item>, Self::Error> {
        use bytes::Buf;

        while src.has_remaining() {
            if src[0] == 0x1b {
                if src.remaining() < 3 {
                    src.reserve(3);
                    return Ok(None)
                }

                let key = if src[1] == b'[' { arrow_key(src[2]) } else { None };
                src.advance(if src[1] == b'[' { 3 } else { 1 });
                if key.is_some() {
                    return Ok(key)
                }
            } else {
                match src.get_u8().to_ascii_lowercase() {
                    b'w' => return Ok(Some(Direction::Up)),
                    b's' => return Ok(Some(Direction::Down)),
                    b'a' => return Ok(Some(Direction::Left)),
                    b'd' => return Ok(Some(Direction::Right)),
                    _ => (),
                }
            }
        }

        src.reserve(1);
        Ok(None)
    }
}


/// Map the final byte of a CSI sequence to a direction
///
fn arrow_key(byte: u8) -> Option<Direction> {
    match byte {
        b'A' => Some(Direction::Up),
        b'B' => Some(Direction::Down),
        b'C' => Some(Direction::Right),
        b'D' => Some(Direction::Left),
        _ => None,
    }
}


/// The built-in start layout
///
/// The outermost rim consists entirely of walls, which keeps every
/// neighbour probe performed by the resolvers on the grid.
///
pub const LAYOUT: field::Layout = {
    use crate::field::KeyColour::A;
    use crate::field::Motion::Resting;
    use crate::field::Tile::{Empty as E, Player, Rubble as R, Wall as W};

    const S: field::Tile = field::Tile::Stone(Resting);
    const C: field::Tile = field::Tile::Crate(Resting);
    const K: field::Tile = field::Tile::Key(A);
    const L: field::Tile = field::Tile::Lock(A);
    const P: field::Tile = Player;

    [
        [W, W, W, W, W, W, W, W],
        [W, P, E, R, R, W, E, W],
        [W, S, W, C, R, W, E, W],
        [W, K, S, R, R, W, E, W],
        [W, S, R, R, R, L, E, W],
        [W, W, W, W, W, W, W, W],
    ]
};


/// Default number of simulation ticks per second
///
pub const DEFAULT_TICK_RATE: u32 = 30;
