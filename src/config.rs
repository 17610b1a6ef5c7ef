use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    colors::{Color, ColorPair},
    error::{Error, Result},
    text::{TextLayout, DEFAULT_HEIGHT, DEFAULT_WIDTH},
};

/// Settings for converting a directory of text pages into SRF files.
///
/// Every key is optional in the TOML form:
///
/// ```toml
/// input_dir = "src/slides"
/// output_dir = "src/surfaces"
/// extension = "slide"
/// width = 240
/// height = 67
/// foreground = "white"
/// background = "black"
/// overwrite = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extension of the text pages, without the dot.
    pub extension: String,
    pub width: u32,
    pub height: u32,
    pub foreground: Color,
    pub background: Color,
    /// Replace SRF files that already exist instead of skipping them.
    pub overwrite: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let colors = ColorPair::default();
        Self {
            input_dir: PathBuf::from("src/slides"),
            output_dir: PathBuf::from("src/surfaces"),
            extension: String::from("slide"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            foreground: colors.fg,
            background: colors.bg,
            overwrite: false,
        }
    }
}

impl ConvertConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|err| Error::Config(err.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn layout(&self) -> TextLayout {
        TextLayout::new(
            self.width,
            self.height,
            ColorPair::new(self.foreground, self.background),
        )
    }
}
