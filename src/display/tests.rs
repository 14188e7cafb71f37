//! Display tests

use bytes::BytesMut;
use tokio_util::codec::Encoder;

use crate::field::Motion;

use super::*;


#[test]
fn encoder_wraps_every_sequence() {
    let mut buf = BytesMut::new();
    AnsiEncoder::new(6, 0)
        .encode(vec![DrawCommand::SetPos(1, 2), "xy".into()], &mut buf)
        .expect("encoding failed");
    assert_eq!(&buf[..], b"\x1b[?25l\x1b[2;3Hxy\x1b[0m\x1b[7;1H\x1b[?25h".as_ref());
}


#[test]
fn background_codes_follow_the_sgr_table() {
    assert_eq!(SGR::Reset.code(), 0);
    assert_eq!(SGR::Background(None).code(), 49);
    assert_eq!(SGR::Background(Some((Colour::Blue, Brightness::Dark))).code(), 44);
    assert_eq!(SGR::Background(Some((Colour::Green, Brightness::Light))).code(), 102);
}


#[test]
fn empty_tiles_render_in_default_colours() {
    assert_eq!(tile_colour(Tile::Empty), None);
}


#[test]
fn falling_does_not_change_the_colour() {
    assert_eq!(
        tile_colour(Tile::Stone(Motion::Falling)),
        tile_colour(Tile::Stone(Motion::Resting)),
    );
    assert_eq!(
        tile_colour(Tile::Crate(Motion::Falling)),
        tile_colour(Tile::Crate(Motion::Resting)),
    );
}


#[tokio::test]
async fn render_hides_the_cursor_while_drawing() {
    let mut display = Display::new(std::io::Cursor::new(Vec::new()));
    let field = Field::new(crate::game::LAYOUT).expect("could not set up field");

    display.render(&field).await.expect("rendering failed");
    let out = display.writer.into_inner().into_inner();
    assert!(out.starts_with(b"\x1b[?25l"));
    assert!(out.ends_with(b"\x1b[?25h"));
}
