use core::fmt;
use std::convert::TryFrom;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Wire byte that introduces a true-color value.
pub const TRUE_COLOR_TAG: u8 = 17;

/// The fixed 17-entry palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black,
    DarkBlue,
    DarkGreen,
    Teal,
    DarkRed,
    Magenta,
    Olive,
    Silver,
    Gray,
    Blue,
    Green,
    Aqua,
    Red,
    Pink,
    Yellow,
    White,
    /// Reserved slot, still a regular palette index on the wire.
    Transparent,
}

impl PaletteColor {
    /// Every palette entry in wire order.
    pub const ALL: [PaletteColor; 17] = [
        PaletteColor::Black,
        PaletteColor::DarkBlue,
        PaletteColor::DarkGreen,
        PaletteColor::Teal,
        PaletteColor::DarkRed,
        PaletteColor::Magenta,
        PaletteColor::Olive,
        PaletteColor::Silver,
        PaletteColor::Gray,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Aqua,
        PaletteColor::Red,
        PaletteColor::Pink,
        PaletteColor::Yellow,
        PaletteColor::White,
        PaletteColor::Transparent,
    ];

    /// Returns the wire byte for this entry.
    ///
    /// The mapping is spelled out here and must never follow the
    /// declaration order of the enum.
    pub fn index(self) -> u8 {
        match self {
            PaletteColor::Black => 0,
            PaletteColor::DarkBlue => 1,
            PaletteColor::DarkGreen => 2,
            PaletteColor::Teal => 3,
            PaletteColor::DarkRed => 4,
            PaletteColor::Magenta => 5,
            PaletteColor::Olive => 6,
            PaletteColor::Silver => 7,
            PaletteColor::Gray => 8,
            PaletteColor::Blue => 9,
            PaletteColor::Green => 10,
            PaletteColor::Aqua => 11,
            PaletteColor::Red => 12,
            PaletteColor::Pink => 13,
            PaletteColor::Yellow => 14,
            PaletteColor::White => 15,
            PaletteColor::Transparent => 16,
        }
    }

    /// Looks up the named entry for a wire byte.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.index() == index)
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::DarkBlue => "dark-blue",
            PaletteColor::DarkGreen => "dark-green",
            PaletteColor::Teal => "teal",
            PaletteColor::DarkRed => "dark-red",
            PaletteColor::Magenta => "magenta",
            PaletteColor::Olive => "olive",
            PaletteColor::Silver => "silver",
            PaletteColor::Gray => "gray",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Aqua => "aqua",
            PaletteColor::Red => "red",
            PaletteColor::Pink => "pink",
            PaletteColor::Yellow => "yellow",
            PaletteColor::White => "white",
            PaletteColor::Transparent => "transparent",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        if name == "grey" {
            return Some(PaletteColor::Gray);
        }
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color of a cell: a palette index or an explicit 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    /// Palette index. Values above 16 are not named but still encoded as-is.
    Palette(u8),
    /// True color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Palette color from any integer, keeping only the low 8 bits.
    pub fn palette_lossy(index: u32) -> Self {
        Self::Palette((index & 0xFF) as u8)
    }

    /// True color from any integers, keeping only the low 8 bits of each.
    pub fn rgb_lossy(r: u32, g: u32, b: u32) -> Self {
        Self::Rgb((r & 0xFF) as u8, (g & 0xFF) as u8, (b & 0xFF) as u8)
    }

    /// Number of bytes `encode_into` appends.
    pub fn encoded_len(&self) -> usize {
        match self {
            Color::Palette(_) => 1,
            Color::Rgb(..) => 4,
        }
    }

    /// Appends the SRF encoding of this color to `out`.
    ///
    /// Palette colors take a single byte, true colors take
    /// [`TRUE_COLOR_TAG`] followed by red, green and blue.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match *self {
            Color::Palette(index) => out.push(index),
            Color::Rgb(r, g, b) => out.extend_from_slice(&[TRUE_COLOR_TAG, r, g, b]),
        }
    }
}

impl From<PaletteColor> for Color {
    fn from(c: PaletteColor) -> Self {
        Self::Palette(c.index())
    }
}

/// Parses a color from a string: palette names ("white", "dark-blue"),
/// a palette index of one to three digits (0-255), or hex RGB
/// ("#rrggbb" or "rrggbb").
impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase().replace('_', "-");
        if let Some(named) = PaletteColor::from_name(&s) {
            return Ok(named.into());
        }
        let err = Error::ColorParsing(s.clone());
        let hex = match s.strip_prefix('#') {
            Some(hex) => hex,
            None if s.len() <= 3 => {
                if !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err);
                }
                return s.parse::<u8>().map(Self::Palette).map_err(|_| err);
            }
            None => s.as_str(),
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err);
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err.clone())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err.clone())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err.clone())?;
        Ok(Self::Rgb(r, g, b))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

/// Formats the color as a palette name, a bare index, or hex RGB.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::Palette(index) => match PaletteColor::from_index(index) {
                Some(named) => write!(f, "{}", named),
                None => write!(f, "{}", index),
            },
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// A pair of foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: PaletteColor::White.into(),
            bg: PaletteColor::Black.into(),
        }
    }
}

impl ColorPair {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}
