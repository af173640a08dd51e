//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::{Component, Components};

/// A three channel vector used for weighted channel sums.
pub type Vector = Vector3D<Component>;

impl From<Components> for Vector {
    fn from(value: Components) -> Self {
        Vector::new(value.0, value.1, value.2)
    }
}

/// Reduce a hue in degrees into the range `[0, 360)`. Non-finite hues become
/// 0.
pub fn normalize_hue(hue: Component) -> Component {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a value into the unit range, mapping NaN to 0.
pub fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        num_traits::clamp(value, 0.0, 1.0)
    }
}

/// Clamp a value into the byte range `[0, 255]`, mapping NaN to 0.
pub fn clamp_byte(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        num_traits::clamp(value, 0.0, 255.0)
    }
}

/// Round a value in `[0, 255]` to the nearest byte.
pub fn to_byte(value: Component) -> u8 {
    clamp_byte(value.round()) as u8
}

/// Linear interpolation between `a` and `b` where `t` is the progress.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Weighted sum of three channels.
pub fn weighted_sum(channels: Components, weights: Vector) -> Component {
    Vector::from(channels).dot(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_wraps_into_range() {
        assert_component_eq!(normalize_hue(-30.0), 330.0);
        assert_component_eq!(normalize_hue(720.0), 0.0);
        assert_component_eq!(normalize_hue(400.0), 40.0);
        assert_eq!(normalize_hue(Component::NAN), 0.0);
        assert_eq!(normalize_hue(Component::INFINITY), 0.0);
    }

    #[test]
    fn clamps() {
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(Component::NAN), 0.0);
        assert_eq!(clamp_byte(300.0), 255.0);
        assert_eq!(to_byte(127.5), 128);
        assert_eq!(to_byte(-4.0), 0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn weighted_sum_of_channels() {
        let sum = weighted_sum(Components(1.0, 2.0, 3.0), Vector::new(0.5, 0.25, 1.0));
        assert_component_eq!(sum, 4.0);
    }
}
