use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    colors::ColorPair,
    content::{Cell, Size, Surface},
    error::Result,
    flags::CellFlags,
};

/// Default width of a converted text page.
pub const DEFAULT_WIDTH: u32 = 240;
/// Default height of a converted text page.
pub const DEFAULT_HEIGHT: u32 = 67;

/// Characters that end a line, in addition to `\r\n` counted as one.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines at every line break character, treating
/// `\r\n` as a single break. A trailing break does not start a new line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();
    while let Some((idx, ch)) = iter.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next, '\n')) = iter.peek() {
                iter.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Fixed page geometry and colors used to turn plain text into a surface.
///
/// Short lines and missing lines are padded with spaces; anything past
/// `width` columns or `height` lines is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    pub width: u32,
    pub height: u32,
    pub colors: ColorPair,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colors: ColorPair::default(),
        }
    }
}

impl TextLayout {
    pub fn new(width: u32, height: u32, colors: ColorPair) -> Self {
        Self {
            width,
            height,
            colors,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Builds a `width` x `height` surface from text lines.
    pub fn surface_from_str(&self, text: &str) -> Surface {
        let blank = Cell::blank(self.colors);
        let mut cells = Vec::with_capacity(self.size().area() as usize);
        let mut lines = split_lines(text).into_iter();
        let mut clipped = false;
        for _ in 0..self.height {
            let mut chars = lines.next().unwrap_or("").chars();
            for _ in 0..self.width {
                cells.push(match chars.next() {
                    Some(ch) => Cell::new(ch, CellFlags::empty(), self.colors.fg, self.colors.bg),
                    None => blank,
                });
            }
            clipped |= chars.next().is_some();
        }
        if clipped || lines.next().is_some() {
            log::debug!("text clipped to {}", self.size());
        }
        Surface::new(self.size(), cells)
    }

    /// Reads all of `r` and builds a surface from it.
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn surface_from_reader<R: Read>(&self, mut r: R) -> Result<Surface> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        Ok(self.surface_from_str(&String::from_utf8_lossy(&bytes)))
    }

    /// Reads a text file and builds a surface from it.
    pub fn surface_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Surface> {
        self.surface_from_reader(File::open(path)?)
    }
}
