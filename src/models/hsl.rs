//! Model a color with the HSL notation.

use crate::{color::Component, Color};

chromaton_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue in degrees.
        hue: Component,
        /// The saturation in `[0, 1]`.
        saturation: Component,
        /// The lightness in `[0, 1]`.
        lightness: Component,
    }
}

impl From<&Color> for Hsl {
    fn from(value: &Color) -> Self {
        Hsl::new(value.hue(), value.hsl_saturation(), value.lightness()).with_alpha(value.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{channel::Keys, models::Model};

    #[test]
    fn from_color() {
        let hsl = Hsl::from(&Color::rgb(255.0, 0.0, 0.0));
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5).with_alpha(1.0));
    }

    #[test]
    fn channels_are_keyed() {
        let channels = Hsl::new(90.0, 0.5, 0.5).to_channels();
        assert_eq!(channels.keys(), Keys::HSL);
        assert_eq!(channels.get(Keys::L), Some(0.5));
    }
}
