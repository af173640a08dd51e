//! Keyed channel records for each notation.
//!
//! Records are plain data. They do not clamp or reduce anything until they
//! are turned into a [`Color`](crate::Color).

use crate::channel::ChannelMap;

mod hsl;
mod hsv;
mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// A trait implemented for records that can be turned into keyed channels.
pub trait Model {
    /// Convert a record to keyed channels.
    fn to_channels(&self) -> ChannelMap;
}
