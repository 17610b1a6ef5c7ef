//! SRF v1 encoder.
//!
//! Layout, little-endian throughout:
//!
//! ```text
//! 0..3   "SRF"
//! 3      version (1)
//! 4..8   width  (u32)
//! 8..12  height (u32)
//! 12..   one record per cell, row-major:
//!        code (u32) flags (u16) foreground background
//! ```
//!
//! A color is one palette byte, or `17` followed by red, green and blue.

use std::convert::TryFrom;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::content::{Cell, Surface};
use crate::error::{Error, Result};

/// Magic tag at the start of every SRF buffer.
pub const MAGIC: &[u8; 3] = b"SRF";
/// Format version written by this encoder.
pub const VERSION: u8 = 1;
/// Size of the fixed header.
pub const HEADER_LEN: usize = 12;
/// Bytes of a cell record that do not depend on its colors.
pub const CELL_FIXED_LEN: usize = 6;

impl Cell {
    /// Size of this cell's record.
    pub fn encoded_len(&self) -> usize {
        CELL_FIXED_LEN + self.foreground.encoded_len() + self.background.encoded_len()
    }

    /// Appends this cell's record to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.code.to_le_bytes());
        out.extend_from_slice(&self.flags.bits().to_le_bytes());
        self.foreground.encode_into(out);
        self.background.encode_into(out);
    }
}

impl Surface {
    fn check_shape(&self) -> Result<()> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: self.size.area(),
                actual: self.cells.len(),
            })
        }
    }

    /// Exact length of the buffer `to_srf` would return.
    pub fn encoded_len(&self) -> Result<usize> {
        self.check_shape()?;
        Ok(HEADER_LEN + self.cells.iter().map(Cell::encoded_len).sum::<usize>())
    }

    /// Encodes the whole surface.
    ///
    /// Fails with [`Error::ShapeMismatch`] before anything is produced when
    /// the cell count differs from `width * height`.
    pub fn to_srf(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len()?);
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        out.extend_from_slice(&self.size.width.to_le_bytes());
        out.extend_from_slice(&self.size.height.to_le_bytes());
        for cell in &self.cells {
            cell.encode_into(&mut out);
        }
        Ok(out)
    }

    /// Encodes the surface and writes it to `w` in a single call.
    pub fn write_srf<W: Write>(&self, w: &mut W) -> Result<()> {
        let buf = self.to_srf()?;
        w.write_all(&buf)?;
        Ok(())
    }

    /// Encodes the surface and saves it to a file.
    ///
    /// The file is not created when encoding fails.
    pub fn to_srf_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let buf = self.to_srf()?;
        let mut file = File::create(path)?;
        file.write_all(&buf)?;
        Ok(())
    }
}

impl TryFrom<&Surface> for Vec<u8> {
    type Error = Error;
    fn try_from(value: &Surface) -> Result<Self> {
        value.to_srf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{Color, PaletteColor};
    use crate::content::Size;
    use crate::flags::CellFlags;

    fn cell(ch: char, fg: Color, bg: Color) -> Cell {
        Cell::new(ch, CellFlags::empty(), fg, bg)
    }

    #[test]
    fn two_by_one_white_on_black() {
        let white = PaletteColor::White.into();
        let black = PaletteColor::Black.into();
        let s = Surface::new(
            Size::new(2, 1),
            vec![cell('A', white, black), cell(' ', white, black)],
        );
        let expected: Vec<u8> = vec![
            0x53, 0x52, 0x46, 0x01, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, // header
            0x41, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, // 'A'
            0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, // ' '
        ];
        assert_eq!(s.to_srf().unwrap(), expected);
        assert_eq!(s.encoded_len().unwrap(), expected.len());
    }

    #[test]
    fn rgb_foreground_record() {
        let c = cell('Z', Color::Rgb(255, 0, 128), PaletteColor::Black.into());
        let mut out = Vec::new();
        c.encode_into(&mut out);
        assert_eq!(out, vec![0x5A, 0, 0, 0, 0, 0, 17, 255, 0, 128, 0]);
        assert_eq!(c.encoded_len(), 11);
    }

    #[test]
    fn mismatch_is_rejected() {
        let s = Surface::new(Size::new(2, 2), vec![Cell::default(); 3]);
        match s.to_srf() {
            Err(Error::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(s.encoded_len().is_err());
    }

    #[test]
    fn failed_encode_leaves_writer_untouched() {
        let s = Surface::new(Size::new(1, 1), Vec::new());
        let mut sink = Vec::new();
        assert!(s.write_srf(&mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn empty_surface_is_header_only() {
        let s = Surface::new(Size::new(0, 0), Vec::new());
        assert_eq!(
            s.to_srf().unwrap(),
            vec![b'S', b'R', b'F', 1, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn flags_are_little_endian() {
        let c = Cell::from_raw(1, 0x0102, Color::Palette(0), Color::Palette(0));
        let mut out = Vec::new();
        c.encode_into(&mut out);
        assert_eq!(&out[4..6], &[0x02, 0x01]);
    }
}
