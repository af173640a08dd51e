//! Move between colors: [`Color::towards`], tints, shades and gradients.
//!
//! Red, green, blue and alpha are interpolated independently and the result
//! is rounded back to bytes.

use crate::{
    channel::{Normalized, RgbScale},
    color::{Color, Component, Components},
    error::{ensure_finite, Error, Result},
    math::lerp,
    names,
};

/// The number of colors in a gradient when none is requested.
pub const DEFAULT_GRADIENT_SLICES: usize = 20;

impl Color {
    fn mix(
        &self,
        to: &Color,
        by: Component,
        interpolate: impl Fn(Component, Component, Component) -> Component,
    ) -> Color {
        let [r0, g0, b0, a0] = self.to_rgba_array();
        let [r1, g1, b1, a1] = to.to_rgba_array();

        Color::from_normalized(Normalized::rgb(
            Components(
                interpolate(r0, r1, by),
                interpolate(g0, g1, by),
                interpolate(b0, b1, by),
            ),
            RgbScale::Bytes,
            Some(interpolate(a0, a1, by)),
        ))
    }

    /// Linearly interpolate from this color to `to`, where `by` is the
    /// progress between them. Fails if `by` is not finite.
    pub fn towards(&self, to: &Color, by: Component) -> Result<Color> {
        self.towards_with(to, by, lerp)
    }

    /// Like [`Color::towards`] with a custom interpolator called as
    /// `interpolate(from, to, by)` for each channel.
    pub fn towards_with(
        &self,
        to: &Color,
        by: Component,
        interpolate: impl Fn(Component, Component, Component) -> Component,
    ) -> Result<Color> {
        let by = ensure_finite("by", by)?;
        Ok(self.mix(to, by, interpolate))
    }

    /// Move towards white by `by`.
    pub fn tint(&self, by: Component) -> Result<Color> {
        self.towards(&names::WHITE.to_color(), by)
    }

    /// Same as [`Color::tint`].
    pub fn lighten(&self, by: Component) -> Result<Color> {
        self.tint(by)
    }

    /// Move towards black by `by`.
    pub fn shade(&self, by: Component) -> Result<Color> {
        self.towards(&names::BLACK.to_color(), by)
    }

    /// Same as [`Color::shade`].
    pub fn darken(&self, by: Component) -> Result<Color> {
        self.shade(by)
    }

    /// `slices` colors evenly spaced from this color to `to`, both included.
    pub fn gradient(&self, to: &Color, slices: usize) -> Vec<Color> {
        match slices {
            0 => Vec::new(),
            1 => vec![*self],
            _ => {
                let stops = (slices - 1) as Component;
                (0..slices)
                    .map(|slice| self.mix(to, slice as Component / stops, lerp))
                    .collect()
            }
        }
    }

    /// The color at the 1-based `slice` of a gradient with `slices` colors.
    ///
    /// `slice` counts from 1, so `gradient_slice(to, slices, n)` is
    /// `gradient(to, slices)[n - 1]`. Lookups that index the gradient from 0
    /// are off by one against this.
    pub fn gradient_slice(&self, to: &Color, slices: usize, slice: usize) -> Result<Color> {
        if slice == 0 || slice > slices {
            return Err(Error::SliceOutOfRange { slice, slices });
        }
        if slices == 1 {
            return Ok(*self);
        }
        let by = (slice - 1) as Component / (slices - 1) as Component;
        Ok(self.mix(to, by, lerp))
    }
}
