use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use srf::{Color, ConvertConfig};

/// Convert a directory of plain-text pages into SRF surfaces.
#[derive(Parser, Debug)]
#[command(name = "srf-convert", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with conversion settings. Flags below override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the text pages.
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the .srf files.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Extension of the text pages, without the dot.
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Surface width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Foreground color: palette name, index 0-255 or #rrggbb.
    #[arg(long)]
    pub fg: Option<Color>,

    /// Background color: palette name, index 0-255 or #rrggbb.
    #[arg(long)]
    pub bg: Option<Color>,

    /// Overwrite existing .srf files.
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies command-line values on top of `config`.
    pub fn apply(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(ref dir) = self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ref ext) = self.extension {
            config.extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fg) = self.fg {
            config.foreground = fg;
        }
        if let Some(bg) = self.bg {
            config.background = bg;
        }
        if self.force {
            config.overwrite = true;
        }
        config
    }
}
