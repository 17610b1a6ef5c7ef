pub mod batch;
pub mod colors;
pub mod config;
pub mod content;
pub mod encoder;
pub mod error;
pub mod flags;
pub mod text;

pub use batch::{convert_dir, BatchReport};
pub use colors::{Color, ColorPair, PaletteColor, TRUE_COLOR_TAG};
pub use config::ConvertConfig;
pub use content::{Cell, Size, Surface};
pub use encoder::{HEADER_LEN, MAGIC, VERSION};
pub use error::{Error, Result};
pub use flags::CellFlags;
pub use text::TextLayout;
