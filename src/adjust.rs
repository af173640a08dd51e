//! Adjustments of a single color: greyscale conversion and websafe
//! rounding.

use crate::{
    color::{Color, Component, Components},
    math::{clamp_byte, to_byte, weighted_sum, Vector},
};

/// Formula used to turn a color into a single grey level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Greyscale {
    /// `0.3 R + 0.59 G + 0.11 B`.
    #[default]
    Luminance,
    /// `0.35 + 13 (R + G + B) / 60`.
    Xarg,
    /// `(13 (R + G + B) + 5355) / 60`.
    Sun,
}

impl Greyscale {
    fn weights(self) -> (Vector, Component) {
        const THIRTEEN_SIXTIETHS: Component = 13.0 / 60.0;
        let even = Vector::new(THIRTEEN_SIXTIETHS, THIRTEEN_SIXTIETHS, THIRTEEN_SIXTIETHS);
        match self {
            Greyscale::Luminance => (Vector::new(0.3, 0.59, 0.11), 0.0),
            Greyscale::Xarg => (even, 0.35),
            Greyscale::Sun => (even, 5355.0 / 60.0),
        }
    }

    /// The grey level of `color` in `[0, 255]`.
    pub fn level(self, color: &Color) -> Component {
        let [red, green, blue] = color.to_bytes();
        let (weights, offset) = self.weights();
        let channels = Components(red.into(), green.into(), blue.into());
        clamp_byte(weighted_sum(channels, weights) + offset)
    }
}

impl Color {
    /// The grey with the level `formula` gives for this color.
    pub fn desaturate(&self, formula: Greyscale) -> Color {
        let level = to_byte(formula.level(self));
        Color::from_bytes(level, level, level).with_alpha(self.alpha())
    }

    /// Same as [`Color::desaturate`].
    pub fn greyscale(&self, formula: Greyscale) -> Color {
        self.desaturate(formula)
    }

    /// The closest of the 216 websafe colors, which have channels that are
    /// multiples of 51.
    pub fn websafe(&self) -> Color {
        let [red, green, blue] = self.to_bytes().map(|c| {
            let steps = (Component::from(c) / 51.0).round();
            to_byte(steps * 51.0)
        });
        Color::from_bytes(red, green, blue).with_alpha(self.alpha())
    }
}
