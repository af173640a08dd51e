//! Color schemes derived from a single seed color.
//!
//! [`Color::triad`] and [`Color::tetrad`] permute the red, green and blue
//! channels instead of rotating the hue, so they are not hue accurate for
//! every seed. The permuted colors are opaque.

use crate::color::{Color, Component};

/// Number of colors returned by [`Color::analogous`] by default.
pub const DEFAULT_ANALOGOUS_RESULTS: usize = 8;

/// Number of hue slices the color wheel is split in by default.
pub const DEFAULT_ANALOGOUS_SLICES: usize = 30;

/// Number of colors returned by [`Color::monochromatic`] by default.
pub const DEFAULT_MONOCHROMATIC_RESULTS: usize = 5;

impl Color {
    fn with_hsv(&self, hue: Component, saturation: Component, value: Component) -> Color {
        Color::hsva(hue, saturation, value, self.alpha())
    }

    /// The color on the opposite side of the color wheel.
    pub fn complement(&self) -> Color {
        Color::hsla(
            self.hue() + 180.0,
            self.hsl_saturation(),
            self.lightness(),
            self.alpha(),
        )
    }

    /// This color followed by its `(b, r, g)` and `(g, b, r)` permutations.
    pub fn triad(&self) -> [Color; 3] {
        let [r, g, b] = self.to_bytes();
        [*self, Color::from_bytes(b, r, g), Color::from_bytes(g, b, r)]
    }

    /// This color followed by its `(b, r, b)`, `(b, g, r)` and `(r, b, r)`
    /// permutations.
    pub fn tetrad(&self) -> [Color; 4] {
        let [r, g, b] = self.to_bytes();
        [
            *self,
            Color::from_bytes(b, r, b),
            Color::from_bytes(b, g, r),
            Color::from_bytes(r, b, r),
        ]
    }

    /// `results` colors, starting with this one, with hues `360 / slices`
    /// degrees apart around the hue of this color.
    ///
    /// The remaining `results - 1` hues start half of `results` slices below
    /// the seed hue and step up one slice at a time.
    pub fn analogous(&self, results: usize, slices: usize) -> Vec<Color> {
        if results == 0 {
            return Vec::new();
        }

        let slice = 360.0 / slices.max(1) as Component;
        let start = self.hue() - (slice * results as Component / 2.0).trunc();

        std::iter::once(*self)
            .chain((1..results).map(|step| {
                self.with_hsv(
                    start + slice * step as Component,
                    self.hsv_saturation(),
                    self.value(),
                )
            }))
            .collect()
    }

    /// `results` colors with the hue and saturation of this color and values
    /// evenly stepped from `1 / results` up to 1.
    pub fn monochromatic(&self, results: usize) -> Vec<Color> {
        let step = 1.0 / results as Component;
        (1..=results)
            .map(|i| self.with_hsv(self.hue(), self.hsv_saturation(), i as Component * step))
            .collect()
    }

    /// This color followed by the colors 150 and 210 degrees around the
    /// wheel.
    pub fn split_complement(&self) -> [Color; 3] {
        [
            *self,
            self.with_hsv(self.hue() + 150.0, self.hsv_saturation(), self.value()),
            self.with_hsv(self.hue() + 210.0, self.hsv_saturation(), self.value()),
        ]
    }
}
