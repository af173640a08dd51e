//! Conversions between the RGB, HSL and HSV notations and hexadecimal
//! strings.
//!
//! The functions operating on [`Components`] work in unit ranges: red, green
//! and blue, saturation, lightness and value are in `[0, 1]`, hue is in
//! degrees. The record methods ([`Rgb::to_hsl`] and friends) work with red,
//! green and blue in `[0, 255]`.
//!
//! NOTE: Achromatic colors get a hue of 0 instead of a missing hue.
//!
//! ```rust
//! use chromaton::models::Rgb;
//! let hsl = Rgb::new(0.0, 255.0, 0.0).to_hsl();
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (120.0, 1.0, 0.5));
//! ```

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    math::{clamp_unit, normalize_hue, to_byte},
    models::{Hsl, Hsv, Rgb},
};

impl Rgb {
    fn to_unit(&self) -> Components {
        self.to_components().map(|c| c / 255.0)
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl {
            alpha: self.alpha,
            ..rgb_to_hsl(&self.to_unit()).into()
        }
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        Hsv {
            alpha: self.alpha,
            ..rgb_to_hsv(&self.to_unit()).into()
        }
    }

    /// Format this color as a `#RRGGBB` string, rounding each channel.
    pub fn to_hex(&self) -> String {
        let Components(red, green, blue) = self.to_components();
        rgb_to_hex([to_byte(red), to_byte(green), to_byte(blue)])
    }
}

impl Hsl {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            alpha: self.alpha,
            ..hsl_to_rgb(&self.to_components()).map(|c| c * 255.0).into()
        }
    }

    /// Convert this color to the HSV notation without going through RGB.
    pub fn to_hsv(&self) -> Hsv {
        Hsv {
            alpha: self.alpha,
            ..hsl_to_hsv(&self.to_components()).into()
        }
    }
}

impl Hsv {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            alpha: self.alpha,
            ..hsv_to_rgb(&self.to_components()).map(|c| c * 255.0).into()
        }
    }

    /// Convert this color to the HSL notation without going through RGB.
    pub fn to_hsl(&self) -> Hsl {
        Hsl {
            alpha: self.alpha,
            ..hsv_to_hsl(&self.to_components()).into()
        }
    }
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (normalize_hue(hue), min, max)
}

/// Convert from RGB notation to HSL notation.
pub fn rgb_to_hsl(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let saturation = if delta == 0.0 {
        0.0
    } else {
        clamp_unit(delta / (1.0 - (2.0 * lightness - 1.0).abs()))
    };

    Components(hue, saturation, lightness)
}

/// Convert from RGB notation to HSV notation.
pub fn rgb_to_hsv(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let delta = max - min;
    let saturation = if delta == 0.0 { 0.0 } else { delta / max };

    Components(hue, saturation, max)
}

/// Place `chroma` and the intermediate `x` into the sextant of `hue`. Hues
/// that are not finite have no sextant and produce black.
fn hue_to_rgb(hue: Component, chroma: Component) -> Components {
    if !hue.is_finite() {
        return Components(0.0, 0.0, 0.0);
    }

    let h = normalize_hue(hue) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    match h.floor() as u8 {
        0 => Components(chroma, x, 0.0),
        1 => Components(x, chroma, 0.0),
        2 => Components(0.0, chroma, x),
        3 => Components(0.0, x, chroma),
        4 => Components(x, 0.0, chroma),
        5 => Components(chroma, 0.0, x),
        _ => Components(0.0, 0.0, 0.0),
    }
}

/// Convert from HSL notation to RGB notation.
pub fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;
    let (saturation, lightness) = (clamp_unit(saturation), clamp_unit(lightness));

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let m = lightness - chroma / 2.0;

    hue_to_rgb(hue, chroma).map(|c| clamp_unit(c + m))
}

/// Convert from HSV notation to RGB notation.
pub fn hsv_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, value) = *from;
    let (saturation, value) = (clamp_unit(saturation), clamp_unit(value));

    let chroma = value * saturation;
    let m = value - chroma;

    hue_to_rgb(hue, chroma).map(|c| clamp_unit(c + m))
}

/// Convert from HSL notation to HSV notation. The hue is passed through.
pub fn hsl_to_hsv(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    let value = lightness + saturation * lightness.min(1.0 - lightness);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - lightness / value)
    };

    Components(hue, clamp_unit(saturation), clamp_unit(value))
}

/// Convert from HSV notation to HSL notation. The hue is passed through.
pub fn hsv_to_hsl(from: &Components) -> Components {
    let Components(hue, saturation, value) = *from;

    let lightness = value * (1.0 - saturation / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness)
    };

    Components(hue, clamp_unit(saturation), clamp_unit(lightness))
}

/// Format bytes as an upper case `#RRGGBB` string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    let [red, green, blue] = rgb;
    format!("#{:02X}{:02X}{:02X}", red, green, blue)
}

/// Parse a 3 or 6 digit hexadecimal color, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let error = || Error::Parse(hex.to_owned());

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(error());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| error());

    match digits.len() {
        3 => {
            let mut rgb = [0; 3];
            for (out, c) in rgb.iter_mut().zip(digits.chars()) {
                *out = channel(&c.to_string().repeat(2))?;
            }
            Ok(rgb)
        }
        6 => Ok([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        _ => Err(error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn bytes(c: Components) -> [u8; 3] {
        [to_byte(c.0 * 255.0), to_byte(c.1 * 255.0), to_byte(c.2 * 255.0)]
    }

    #[test]
    fn green_to_hsl() {
        let hsl = Rgb::new(0.0, 255.0, 0.0).to_hsl();
        assert_eq!(hsl.hue, 120.0);
        assert_eq!(hsl.saturation, 1.0);
        assert_eq!(hsl.lightness, 0.5);
        assert_eq!(hsl.alpha, None);
    }

    #[test]
    fn test_conversions() {
        // (rgb, hsl, hsv)
        let cases = [
            ([255.0, 0.0, 0.0], [0.0, 1.0, 0.5], [0.0, 1.0, 1.0]),
            ([0.0, 0.0, 255.0], [240.0, 1.0, 0.5], [240.0, 1.0, 1.0]),
            ([255.0, 0.0, 255.0], [300.0, 1.0, 0.5], [300.0, 1.0, 1.0]),
            ([0.0, 128.0, 0.0], [120.0, 1.0, 128.0 / 510.0], [120.0, 1.0, 128.0 / 255.0]),
            ([255.0, 255.0, 255.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([51.0, 102.0, 153.0], [210.0, 0.5, 0.4], [210.0, 2.0 / 3.0, 0.6]),
        ];

        for ([r, g, b], [h, s, l], [hv, sv, v]) in cases {
            let rgb = Rgb::new(r, g, b);

            let hsl = rgb.to_hsl();
            assert_component_eq!(hsl.hue, h);
            assert_component_eq!(hsl.saturation, s);
            assert_component_eq!(hsl.lightness, l);

            let hsv = rgb.to_hsv();
            assert_component_eq!(hsv.hue, hv);
            assert_component_eq!(hsv.saturation, sv);
            assert_component_eq!(hsv.value, v);

            let back = hsl.to_rgb();
            assert_component_eq!(back.red, r);
            assert_component_eq!(back.green, g);
            assert_component_eq!(back.blue, b);

            let back = hsv.to_rgb();
            assert_component_eq!(back.red, r);
            assert_component_eq!(back.green, g);
            assert_component_eq!(back.blue, b);
        }
    }

    #[test]
    fn round_trips_every_grid_color() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let unit = Components(r as Component, g as Component, b as Component)
                        .map(|c| c / 255.0);
                    assert_eq!(bytes(hsl_to_rgb(&rgb_to_hsl(&unit))), rgb);
                    assert_eq!(bytes(hsv_to_rgb(&rgb_to_hsv(&unit))), rgb);
                }
            }
        }
    }

    #[test]
    fn achromatic_hue_is_zero() {
        for v in [0.0, 0.2, 0.5, 1.0] {
            let grey = Components(v, v, v);
            let hsl = rgb_to_hsl(&grey);
            assert_eq!((hsl.0, hsl.1), (0.0, 0.0));
            let hsv = rgb_to_hsv(&grey);
            assert_eq!((hsv.0, hsv.1), (0.0, 0.0));
        }
    }

    #[test]
    fn hue_is_reduced_by_the_converter() {
        let a = hsl_to_rgb(&Components(-120.0, 1.0, 0.5));
        let b = hsl_to_rgb(&Components(240.0, 1.0, 0.5));
        assert_eq!(bytes(a), bytes(b));
        assert_eq!(bytes(b), [0, 0, 255]);
    }

    #[test]
    fn non_finite_hue_is_black_chroma() {
        let rgb = hsv_to_rgb(&Components(Component::NAN, 1.0, 1.0));
        assert_eq!(rgb, Components(0.0, 0.0, 0.0));
    }

    #[test]
    fn hsl_and_hsv_agree() {
        let hsl = Components(30.0, 0.5, 0.25);
        let hsv = hsl_to_hsv(&hsl);
        assert_eq!(bytes(hsv_to_rgb(&hsv)), bytes(hsl_to_rgb(&hsl)));
        let back = hsv_to_hsl(&hsv);
        assert_component_eq!(back.1, 0.5);
        assert_component_eq!(back.2, 0.25);
    }

    #[test]
    fn hex() {
        assert_eq!(rgb_to_hex([255, 0, 10]), "#FF000A");
        assert_eq!(hex_to_rgb("#ff000a"), Ok([255, 0, 10]));
        assert_eq!(hex_to_rgb("0Fa"), Ok([0, 255, 170]));
        assert_eq!(Rgb::new(254.6, 0.2, 16.0).to_hex(), "#FF0010");
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#GGGGGG").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#ABCDEF", "#0A0B0C", "#7F3FE0"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), hex);
            assert_eq!(
                rgb_to_hex(hex_to_rgb(&hex.to_lowercase()).unwrap()),
                hex
            );
        }
    }
}
