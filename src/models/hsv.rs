//! Model a color with the HSV notation, also known as HSB.

use crate::{color::Component, Color};

chromaton_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsv {
        /// The hue in degrees.
        hue: Component,
        /// The saturation in `[0, 1]`.
        saturation: Component,
        /// The value, or brightness, in `[0, 1]`.
        value: Component,
    }
}

impl From<&Color> for Hsv {
    fn from(value: &Color) -> Self {
        Hsv::new(value.hue(), value.hsv_saturation(), value.value()).with_alpha(value.alpha())
    }
}
