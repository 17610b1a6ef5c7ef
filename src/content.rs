use core::fmt;
use std::convert::TryFrom;

use crate::{
    colors::{Color, ColorPair},
    flags::CellFlags,
};

/// Space character code.
pub const SPACE: u32 = ' ' as u32;

/// Dimensions of a surface, in cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells a surface of this size holds.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single grid position: code point, style flags and two colors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    /// Unicode scalar value displayed in this cell.
    pub code: u32,
    pub flags: CellFlags,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(ColorPair::default())
    }
}

impl Cell {
    pub fn new(ch: char, flags: CellFlags, foreground: Color, background: Color) -> Self {
        Self {
            code: ch.into(),
            flags,
            foreground,
            background,
        }
    }

    /// Creates a cell from wide integers: `code` keeps its low 32 bits and
    /// `flags` its low 16 bits. Nothing is rejected.
    pub fn from_raw(code: u64, flags: u32, foreground: Color, background: Color) -> Self {
        Self {
            code: (code & 0xFFFF_FFFF) as u32,
            flags: CellFlags::from_bits_lossy(flags),
            foreground,
            background,
        }
    }

    /// A space without flags in the given colors.
    pub fn blank(colors: ColorPair) -> Self {
        Self {
            code: SPACE,
            flags: CellFlags::empty(),
            foreground: colors.fg,
            background: colors.bg,
        }
    }

    /// Returns the character if `code` is a valid scalar value.
    pub fn ch(&self) -> Option<char> {
        char::try_from(self.code).ok()
    }

    pub fn colors(&self) -> ColorPair {
        ColorPair::new(self.foreground, self.background)
    }
}

/// A rectangular grid of cells stored row-major.
///
/// The cell count is not checked here; see [`Surface::is_consistent`].
/// Encoding refuses surfaces whose cell count does not match their size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub(crate) size: Size,
    pub(crate) cells: Vec<Cell>,
}

impl Surface {
    /// Creates a surface from cells already laid out row-major.
    pub fn new(size: Size, cells: Vec<Cell>) -> Self {
        Self { size, cells }
    }

    /// Creates a surface where every position holds `fill`.
    pub fn filled(size: Size, fill: Cell) -> Self {
        Self {
            size,
            cells: vec![fill; size.area() as usize],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when the cell count equals `width * height`.
    pub fn is_consistent(&self) -> bool {
        self.cells.len() as u64 == self.size.area()
    }

    /// Returns the cell at the given column and row, if present.
    pub fn get(&self, column: u32, row: u32) -> Option<&Cell> {
        if column >= self.size.width || row >= self.size.height {
            return None;
        }
        let idx = row as usize * self.size.width as usize + column as usize;
        self.cells.get(idx)
    }

    /// Iterates over rows of cells. A trailing partial row is yielded as-is.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.size.width as usize;
        let cells: &[Cell] = if width == 0 { &[] } else { &self.cells };
        // chunks() panics on zero
        cells.chunks(width.max(1))
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Writes the characters of the surface row by row.
impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.ch().unwrap_or(char::REPLACEMENT_CHARACTER))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
