//! Model a color with red, green and blue channels.

use crate::{color::Component, Color};

chromaton_macros::gen_model! {
    /// A color specified by its red, green and blue channels in `[0, 255]`.
    ///
    /// When all three channels are at most 1 the record is read as unit
    /// fractions instead, see [`RgbScale::Auto`](crate::channel::RgbScale).
    pub struct Rgb {
        /// The red channel.
        red: Component,
        /// The green channel.
        green: Component,
        /// The blue channel.
        blue: Component,
    }
}

impl From<&Color> for Rgb {
    fn from(value: &Color) -> Self {
        let [red, green, blue] = value.to_bytes();
        Rgb::new(red.into(), green.into(), blue.into()).with_alpha(value.alpha())
    }
}
