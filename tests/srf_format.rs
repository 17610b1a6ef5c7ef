use std::convert::TryFrom;

use pretty_assertions::assert_eq;
use srf::{Cell, CellFlags, Color, ColorPair, Error, PaletteColor, Size, Surface, TextLayout};

fn u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn mixed_surface() -> Surface {
    let cells = vec![
        Cell::new('a', CellFlags::BOLD, Color::Rgb(1, 2, 3), PaletteColor::Black.into()),
        Cell::new('b', CellFlags::empty(), Color::Palette(9), Color::Rgb(4, 5, 6)),
        Cell::new('c', CellFlags::ITALIC, Color::Rgb(7, 8, 9), Color::Rgb(10, 11, 12)),
        Cell::new('d', CellFlags::empty(), Color::Palette(0), Color::Palette(16)),
        Cell::new('e', CellFlags::empty(), Color::Palette(255), Color::Palette(1)),
        Cell::new('f', CellFlags::UNDERLINE, Color::Palette(2), Color::Palette(3)),
    ];
    Surface::new(Size::new(3, 2), cells)
}

#[test]
fn header_fields() {
    let buf = Surface::filled(Size::new(7, 3), Cell::default()).to_srf().unwrap();
    assert_eq!(&buf[0..3], b"SRF");
    assert_eq!(buf[3], 1);
    assert_eq!(u32_le(&buf[4..8]), 7);
    assert_eq!(u32_le(&buf[8..12]), 3);
}

#[test]
fn palette_only_length_is_fixed() {
    let s = Surface::filled(Size::new(5, 4), Cell::default());
    assert_eq!(s.to_srf().unwrap().len(), 12 + 8 * 20);
}

#[test]
fn mixed_length_follows_colors() {
    let s = mixed_surface();
    let expected: usize = 12
        + s.cells()
            .iter()
            .map(|c| 6 + c.foreground.encoded_len() + c.background.encoded_len())
            .sum::<usize>();
    assert_eq!(expected, 12 + 11 + 11 + 14 + 8 + 8 + 8);
    assert_eq!(s.to_srf().unwrap().len(), expected);
    assert_eq!(s.encoded_len().unwrap(), expected);
}

#[test]
fn records_follow_cell_order() {
    let buf = mixed_surface().to_srf().unwrap();
    let first = &buf[12..23];
    assert_eq!(first, &[b'a', 0, 0, 0, 0x01, 0x00, 17, 1, 2, 3, 0][..]);
    let second = &buf[23..34];
    assert_eq!(second, &[b'b', 0, 0, 0, 0, 0, 9, 17, 4, 5, 6][..]);
    assert_eq!(&buf[buf.len() - 8..], &[b'f', 0, 0, 0, 0x02, 0x00, 2, 3][..]);
}

#[test]
fn rgb_foreground_on_black() {
    let s = Surface::new(
        Size::new(1, 1),
        vec![Cell::new(
            'Q',
            CellFlags::empty(),
            Color::Rgb(255, 0, 128),
            PaletteColor::Black.into(),
        )],
    );
    let buf = s.to_srf().unwrap();
    assert_eq!(buf.len(), 12 + 11);
    assert_eq!(&buf[12..], &[b'Q', 0, 0, 0, 0, 0, 17, 255, 0, 128, 0][..]);
}

#[test]
fn wide_code_and_flags_are_masked() {
    let black = Color::Palette(0);
    let wide = Surface::new(
        Size::new(1, 1),
        vec![Cell::from_raw(0x1_0000_0001, 0x10001, black, black)],
    );
    let narrow = Surface::new(Size::new(1, 1), vec![Cell::from_raw(1, 1, black, black)]);
    let wide = wide.to_srf().unwrap();
    assert_eq!(wide, narrow.to_srf().unwrap());
    assert_eq!(&wide[12..18], &[1, 0, 0, 0, 1, 0][..]);
}

#[test]
fn wide_color_components_are_masked() {
    let cell = Cell::new(
        'x',
        CellFlags::empty(),
        Color::rgb_lossy(0x100, 0x1FF, 0x2080),
        Color::palette_lossy(0x10F),
    );
    let buf = Surface::new(Size::new(1, 1), vec![cell]).to_srf().unwrap();
    assert_eq!(&buf[18..], &[17, 0x00, 0xFF, 0x80, 0x0F][..]);
}

#[test]
fn shape_mismatch_in_both_directions() {
    for count in [0usize, 3, 5].iter() {
        let s = Surface::new(Size::new(2, 2), vec![Cell::default(); *count]);
        match s.to_srf() {
            Err(Error::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, *count);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }
}

#[test]
fn failed_encode_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.srf");
    let s = Surface::new(Size::new(3, 3), vec![Cell::default()]);
    assert!(s.to_srf_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn file_holds_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.srf");
    let s = mixed_surface();
    s.to_srf_file(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), s.to_srf().unwrap());
    assert_eq!(Vec::<u8>::try_from(&s).unwrap(), s.to_srf().unwrap());
}

#[test]
fn text_page_encodes() {
    let s = TextLayout::new(3, 2, ColorPair::default()).surface_from_str("AB");
    let buf = s.to_srf().unwrap();
    assert_eq!(buf.len(), 12 + 6 * 8);
    let codes: Vec<u32> = (0..6).map(|i| u32_le(&buf[12 + i * 8..])).collect();
    assert_eq!(codes, vec![0x41, 0x42, 0x20, 0x20, 0x20, 0x20]);
    for i in 0..6 {
        assert_eq!(&buf[12 + i * 8 + 6..12 + i * 8 + 8], &[15, 0][..]);
    }
}
