//! chromaton parses, converts and derives colors in the RGB, HSL and HSV
//! notations.
//!
//! ```rust
//! use chromaton::{Color, Greyscale};
//!
//! let color: Color = "rgb(0, 100, 255)".parse().unwrap();
//! assert_eq!(color.complement().to_hex_string(), "#FF9B00");
//! assert_eq!(color.websafe().to_hex_string(), "#0066FF");
//! assert_eq!(color.desaturate(Greyscale::Luminance).to_rgb_string(), "rgb(87,87,87)");
//! ```
//!
//! Text is parsed by an ordered [`ParserRegistry`] that can be extended with
//! new [`ParserRule`]s.

#![deny(missing_docs)]

pub mod adjust;
pub mod blend;
pub mod channel;
mod color;
pub mod convert;
mod error;
pub mod interpolate;
mod math;
pub mod models;
pub mod names;
pub mod parser;
pub mod scheme;


pub use adjust::Greyscale;
pub use channel::{ChannelMap, Keys, RgbScale};
pub use color::{Color, ColorInput, Component, Components};
pub use error::{Error, Result};
pub use models::{Hsl, Hsv, Rgb};
pub use parser::{ParserRegistry, ParserRule};
