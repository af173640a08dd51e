//! Reshape raw channel values into one of the three triples the converter
//! understands.
//!
//! A [`ChannelMap`] is the keyed channel object every input form funnels
//! through. [`normalize`] picks a conversion path from the keys present and
//! scales the values into unit ranges.

use bitflags::bitflags;

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    math::{clamp_byte, clamp_unit},
};

bitflags! {
    /// The set of channel keys present in a [`ChannelMap`].
    ///
    /// `B` is blue when `R` is present and HSB brightness otherwise.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Keys : u8 {
        /// Red.
        const R = 1 << 0;
        /// Green.
        const G = 1 << 1;
        /// Blue, or brightness in an HSB map.
        const B = 1 << 2;
        /// Hue.
        const H = 1 << 3;
        /// Saturation.
        const S = 1 << 4;
        /// Lightness.
        const L = 1 << 5;
        /// Value.
        const V = 1 << 6;
        /// Alpha.
        const A = 1 << 7;

        /// Red, green and blue.
        const RGB = Self::R.bits() | Self::G.bits() | Self::B.bits();
        /// Hue, saturation and lightness.
        const HSL = Self::H.bits() | Self::S.bits() | Self::L.bits();
        /// Hue, saturation and value.
        const HSV = Self::H.bits() | Self::S.bits() | Self::V.bits();
        /// Hue, saturation and brightness.
        const HSB = Self::H.bits() | Self::S.bits() | Self::B.bits();
    }
}

impl Keys {
    fn index(self) -> Option<usize> {
        (self.bits().count_ones() == 1).then(|| self.bits().trailing_zeros() as usize)
    }

    /// Look up a single key by its short or long name, ignoring case.
    pub fn from_channel_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "r" | "red" => Self::R,
            "g" | "green" => Self::G,
            "b" | "blue" | "brightness" => Self::B,
            "h" | "hue" => Self::H,
            "s" | "saturation" => Self::S,
            "l" | "lightness" => Self::L,
            "v" | "value" => Self::V,
            "a" | "alpha" => Self::A,
            _ => return None,
        };
        Some(key)
    }
}

/// How the red, green and blue channels of a [`ChannelMap`] are scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RgbScale {
    /// Treat the channels as unit fractions when all three are at most 1,
    /// and as bytes otherwise. `(1, 1, 1)` is therefore white, not a near
    /// black.
    #[default]
    Auto,
    /// Channels are in `[0, 255]`.
    Bytes,
    /// Channels are in `[0, 1]`.
    Unit,
}

/// A keyed set of raw channel values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelMap {
    values: [Component; 8],
    keys: Keys,
    scale: RgbScale,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            values: [0.0; 8],
            keys: Keys::empty(),
            scale: RgbScale::Auto,
        }
    }
}

impl ChannelMap {
    /// Create a map without any channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the map with `key` set to `value`. Composite keys are ignored.
    pub fn with(mut self, key: Keys, value: Component) -> Self {
        if let Some(index) = key.index() {
            self.values[index] = value;
            self.keys |= key;
        }
        self
    }

    /// Return the map with an explicit RGB scale.
    pub fn with_scale(self, scale: RgbScale) -> Self {
        Self { scale, ..self }
    }

    /// Return the value stored for a single key.
    pub fn get(&self, key: Keys) -> Option<Component> {
        if !self.keys.contains(key) {
            return None;
        }
        key.index().map(|index| self.values[index])
    }

    /// The keys present in this map.
    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// The RGB scale of this map.
    pub fn scale(&self) -> RgbScale {
        self.scale
    }
}

impl<'a> FromIterator<(&'a str, Component)> for ChannelMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, Component)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ChannelMap::new(), |map, (name, value)| {
                match Keys::from_channel_name(name) {
                    Some(key) => map.with(key, value),
                    None => {
                        log::debug!("ignoring unknown channel `{}`", name);
                        map
                    }
                }
            })
    }
}

/// A triple in one of the supported notations, with every channel except the
/// hue in the unit range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Triple {
    /// Red, green and blue in `[0, 1]`.
    Rgb(Components),
    /// Hue in degrees, saturation and lightness in `[0, 1]`.
    Hsl(Components),
    /// Hue in degrees, saturation and value in `[0, 1]`.
    Hsv(Components),
}

/// The output of [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalized {
    /// The channels selected from the map.
    pub triple: Triple,
    /// The alpha channel clamped to `[0, 1]`, or `None` if it was missing or
    /// not finite.
    pub alpha: Option<Component>,
}

impl Normalized {
    /// Normalize red, green and blue channels scaled by `scale`.
    pub fn rgb(rgb: Components, scale: RgbScale, alpha: Option<Component>) -> Self {
        Self {
            triple: Triple::Rgb(scale_rgb(rgb, scale)),
            alpha: normalize_alpha(alpha),
        }
    }

    /// Normalize HSL channels.
    pub fn hsl(hsl: Components, alpha: Option<Component>) -> Self {
        Self {
            triple: Triple::Hsl(Components(hsl.0, clamp_unit(hsl.1), clamp_unit(hsl.2))),
            alpha: normalize_alpha(alpha),
        }
    }

    /// Normalize HSV channels.
    pub fn hsv(hsv: Components, alpha: Option<Component>) -> Self {
        Self {
            triple: Triple::Hsv(Components(hsv.0, clamp_unit(hsv.1), clamp_unit(hsv.2))),
            alpha: normalize_alpha(alpha),
        }
    }
}

fn normalize_alpha(alpha: Option<Component>) -> Option<Component> {
    alpha.filter(|a| a.is_finite()).map(clamp_unit)
}

/// Scale red, green and blue into the unit range according to `scale`.
pub fn scale_rgb(rgb: Components, scale: RgbScale) -> Components {
    let fractions = match scale {
        RgbScale::Unit => true,
        RgbScale::Bytes => false,
        RgbScale::Auto => rgb.0 <= 1.0 && rgb.1 <= 1.0 && rgb.2 <= 1.0,
    };
    if fractions {
        rgb.map(clamp_unit)
    } else {
        rgb.map(|c| clamp_byte(c) / 255.0)
    }
}

/// Select a conversion path from the keys of `channels` and bring the values
/// into canonical ranges.
///
/// Red selects RGB. Otherwise hue selects HSL when lightness is present, and
/// HSV when value or brightness is. The hue is passed through untouched.
pub fn normalize(channels: &ChannelMap) -> Result<Normalized> {
    let keys = channels.keys();
    let incomplete = || Error::IncompleteChannels(keys);
    let get = |key: Keys| channels.get(key).ok_or_else(incomplete);

    let alpha = channels.get(Keys::A);

    if keys.contains(Keys::R) {
        let rgb = Components(get(Keys::R)?, get(Keys::G)?, get(Keys::B)?);
        return Ok(Normalized::rgb(rgb, channels.scale(), alpha));
    }

    if !keys.contains(Keys::H) {
        return Err(incomplete());
    }

    let hue = get(Keys::H)?;
    let saturation = get(Keys::S)?;
    if let Some(lightness) = channels.get(Keys::L) {
        Ok(Normalized::hsl(Components(hue, saturation, lightness), alpha))
    } else if let Some(value) = channels.get(Keys::V).or(channels.get(Keys::B)) {
        Ok(Normalized::hsv(Components(hue, saturation, value), alpha))
    } else {
        Err(incomplete())
    }
}
