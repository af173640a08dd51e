//! A [`Color`] holds one color in the RGB, HSL and HSV notations at the same
//! time, so every output format is available without further conversion.

use std::{fmt, str::FromStr};

use crate::{
    channel::{normalize, ChannelMap, Normalized, RgbScale, Triple},
    convert::{
        hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
    },
    error::{Error, Result},
    math::{clamp_unit, normalize_hue, to_byte},
    models::{Hsl, Hsv, Rgb},
    names,
    parser::{standard_registry, ParserRegistry},
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Every shape of input a [`Color`] can be built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorInput<'a> {
    /// Text handled by a [`ParserRegistry`].
    Text(&'a str),
    /// An integer packed as `0xRRGGBB`.
    Integer(u32),
    /// Keyed channels, e.g. from a record.
    Channels(ChannelMap),
    /// An ordered sequence of channels. These carry no keys and are always
    /// rejected; use [`Color::from_rgb_slice`] and friends instead.
    Sequence(&'a [Component]),
    /// An existing color, copied as is.
    Color(Color),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        ColorInput::Text(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        ColorInput::Text(value.as_str())
    }
}

impl<'a> From<u32> for ColorInput<'a> {
    fn from(value: u32) -> Self {
        ColorInput::Integer(value)
    }
}

impl<'a> From<ChannelMap> for ColorInput<'a> {
    fn from(value: ChannelMap) -> Self {
        ColorInput::Channels(value)
    }
}

impl<'a> From<&'a [Component]> for ColorInput<'a> {
    fn from(value: &'a [Component]) -> Self {
        ColorInput::Sequence(value)
    }
}

impl<'a> From<Color> for ColorInput<'a> {
    fn from(value: Color) -> Self {
        ColorInput::Color(value)
    }
}

impl<'a> From<&Color> for ColorInput<'a> {
    fn from(value: &Color) -> Self {
        ColorInput::Color(*value)
    }
}

/// A fully populated color value.
///
/// Red, green and blue are bytes. Hue is in `[0, 360)`, everything else in
/// `[0, 1]`. A color is never modified, every operation builds a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Component,
    hue: Component,
    hsl_saturation: Component,
    lightness: Component,
    hsv_saturation: Component,
    value: Component,
}

impl Color {
    /// Build a color from any supported input, parsing text with the
    /// standard rules.
    ///
    /// ```rust
    /// use chromaton::Color;
    /// let red = Color::new("hsl(0, 100%, 50%)").unwrap();
    /// assert_eq!(red.to_hex_string(), "#FF0000");
    /// assert_eq!(Color::new(0x00FF00u32).unwrap().to_name(), Some("lime"));
    /// ```
    pub fn new<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self> {
        Self::with_registry(input, standard_registry())
    }

    /// Build a color from any supported input, parsing text with the rules
    /// in `registry`.
    pub fn with_registry<'a>(
        input: impl Into<ColorInput<'a>>,
        registry: &ParserRegistry,
    ) -> Result<Self> {
        match input.into() {
            ColorInput::Text(text) => Self::from_channels(&registry.parse(text)?),
            ColorInput::Integer(value) => Ok(Self::from_integer(value)),
            ColorInput::Channels(channels) => Self::from_channels(&channels),
            ColorInput::Sequence(values) => Err(Error::UnkeyedSequence(values.to_vec())),
            ColorInput::Color(color) => Ok(color),
        }
    }

    /// Build a color from keyed channels.
    pub fn from_channels(channels: &ChannelMap) -> Result<Self> {
        Ok(Self::from_normalized(normalize(channels)?))
    }

    /// Build a color from normalized channels, filling in the two notations
    /// that were not supplied.
    pub fn from_normalized(normalized: Normalized) -> Self {
        let alpha = normalized.alpha.unwrap_or(1.0);
        match normalized.triple {
            Triple::Rgb(rgb) => Self::from_unit_rgb(rgb, alpha),
            Triple::Hsl(hsl) if hsl.0.is_finite() => {
                let rgb = hsl_to_rgb(&hsl);
                let hsl = Components(normalize_hue(hsl.0), hsl.1, hsl.2);
                Self::from_parts(rgb, hsl, hsl_to_hsv(&hsl), alpha)
            }
            Triple::Hsv(hsv) if hsv.0.is_finite() => {
                let rgb = hsv_to_rgb(&hsv);
                let hsv = Components(normalize_hue(hsv.0), hsv.1, hsv.2);
                Self::from_parts(rgb, hsv_to_hsl(&hsv), hsv, alpha)
            }
            // A hue that is not finite converts to black, so the other
            // notations are derived from that black.
            Triple::Hsl(hsl) => Self::from_unit_rgb(hsl_to_rgb(&hsl), alpha),
            Triple::Hsv(hsv) => Self::from_unit_rgb(hsv_to_rgb(&hsv), alpha),
        }
    }

    fn from_unit_rgb(rgb: Components, alpha: Component) -> Self {
        let bytes = rgb.map(|c| to_byte(c * 255.0).into());
        Self::from_rgb_bytes(bytes, alpha)
    }

    /// `bytes` holds whole numbers in `[0, 255]`.
    fn from_rgb_bytes(bytes: Components, alpha: Component) -> Self {
        let unit = bytes.map(|c| c / 255.0);
        Self::from_parts(unit, rgb_to_hsl(&unit), rgb_to_hsv(&unit), alpha)
    }

    fn from_parts(rgb: Components, hsl: Components, hsv: Components, alpha: Component) -> Self {
        Self {
            red: to_byte(rgb.0 * 255.0),
            green: to_byte(rgb.1 * 255.0),
            blue: to_byte(rgb.2 * 255.0),
            alpha,
            hue: hsl.0,
            hsl_saturation: hsl.1,
            lightness: hsl.2,
            hsv_saturation: hsv.1,
            value: hsv.2,
        }
    }

    /// Build an opaque color from bytes.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgb_bytes(
            Components(red.into(), green.into(), blue.into()),
            1.0,
        )
    }

    /// Build an opaque color from an integer packed as `0xRRGGBB`. Bits above
    /// the lowest 24 are ignored.
    pub fn from_integer(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self::from_bytes(red, green, blue)
    }

    /// Look up a color by its CSS name, ignoring case.
    pub fn named(name: &str) -> Option<Self> {
        names::lookup(name).map(|named| named.to_color())
    }

    /// Build an opaque color from red, green and blue, either all in
    /// `[0, 1]` or in `[0, 255]`.
    pub fn rgb(red: Component, green: Component, blue: Component) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Build a color from red, green, blue and alpha.
    pub fn rgba(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self::from_normalized(Normalized::rgb(
            Components(red, green, blue),
            RgbScale::Auto,
            Some(alpha),
        ))
    }

    /// Build an opaque color from hue, saturation and lightness.
    pub fn hsl(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// Build a color from hue, saturation, lightness and alpha.
    pub fn hsla(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self::from_normalized(Normalized::hsl(
            Components(hue, saturation, lightness),
            Some(alpha),
        ))
    }

    /// Build an opaque color from hue, saturation and value.
    pub fn hsv(hue: Component, saturation: Component, value: Component) -> Self {
        Self::hsva(hue, saturation, value, 1.0)
    }

    /// Build a color from hue, saturation, value and alpha.
    pub fn hsva(hue: Component, saturation: Component, value: Component, alpha: Component) -> Self {
        Self::from_normalized(Normalized::hsv(
            Components(hue, saturation, value),
            Some(alpha),
        ))
    }

    /// Same as [`Color::hsv`].
    pub fn hsb(hue: Component, saturation: Component, brightness: Component) -> Self {
        Self::hsv(hue, saturation, brightness)
    }

    /// Same as [`Color::hsva`].
    pub fn hsba(
        hue: Component,
        saturation: Component,
        brightness: Component,
        alpha: Component,
    ) -> Self {
        Self::hsva(hue, saturation, brightness, alpha)
    }

    /// Build a color from `[r, g, b]` or `[r, g, b, a]`.
    pub fn from_rgb_slice(values: &[Component]) -> Result<Self> {
        let [a, b, c, alpha] = split_sequence(values)?;
        Ok(Self::rgba(a, b, c, alpha))
    }

    /// Build a color from `[h, s, l]` or `[h, s, l, a]`.
    pub fn from_hsl_slice(values: &[Component]) -> Result<Self> {
        let [a, b, c, alpha] = split_sequence(values)?;
        Ok(Self::hsla(a, b, c, alpha))
    }

    /// Build a color from `[h, s, v]` or `[h, s, v, a]`.
    pub fn from_hsv_slice(values: &[Component]) -> Result<Self> {
        let [a, b, c, alpha] = split_sequence(values)?;
        Ok(Self::hsva(a, b, c, alpha))
    }

    /// Return a copy of this color with another alpha. Values that are not
    /// finite reset the alpha to 1.
    pub fn with_alpha(self, alpha: Component) -> Self {
        let alpha = if alpha.is_finite() {
            clamp_unit(alpha)
        } else {
            1.0
        };
        Self { alpha, ..self }
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The red, green and blue channels.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// The alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// The hue in degrees, shared by HSL and HSV.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The HSL saturation.
    pub fn hsl_saturation(&self) -> Component {
        self.hsl_saturation
    }

    /// The HSL lightness.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// The HSV saturation.
    pub fn hsv_saturation(&self) -> Component {
        self.hsv_saturation
    }

    /// The HSV value, or brightness.
    pub fn value(&self) -> Component {
        self.value
    }

    fn rounded_hue(&self) -> Component {
        normalize_hue(self.hue.round())
    }

    /// This color as an [`Rgb`] record.
    pub fn to_rgb(&self) -> Rgb {
        self.into()
    }

    /// This color as an [`Hsl`] record.
    pub fn to_hsl(&self) -> Hsl {
        self.into()
    }

    /// This color as an [`Hsv`] record.
    pub fn to_hsv(&self) -> Hsv {
        self.into()
    }

    /// Same as [`Color::to_hsv`].
    pub fn to_hsb(&self) -> Hsv {
        self.to_hsv()
    }

    /// `#RRGGBB` in upper case.
    pub fn to_hex_string(&self) -> String {
        rgb_to_hex(self.to_bytes())
    }

    /// The two digit upper case hex string of each channel.
    pub fn to_hex_array(&self) -> [String; 3] {
        self.to_bytes().map(|c| format!("{:02X}", c))
    }

    /// `[r, g, b]`.
    pub fn to_rgb_array(&self) -> [u8; 3] {
        self.to_bytes()
    }

    /// `[r, g, b, a]`.
    pub fn to_rgba_array(&self) -> [Component; 4] {
        [
            self.red.into(),
            self.green.into(),
            self.blue.into(),
            self.alpha,
        ]
    }

    /// `[h, s, l]` with the hue rounded to whole degrees.
    pub fn to_hsl_array(&self) -> [Component; 3] {
        [self.rounded_hue(), self.hsl_saturation, self.lightness]
    }

    /// `[h, s, l, a]` with the hue rounded to whole degrees.
    pub fn to_hsla_array(&self) -> [Component; 4] {
        let [h, s, l] = self.to_hsl_array();
        [h, s, l, self.alpha]
    }

    /// `[h, s, v]` with the hue rounded to whole degrees.
    pub fn to_hsv_array(&self) -> [Component; 3] {
        [self.rounded_hue(), self.hsv_saturation, self.value]
    }

    /// `[h, s, v, a]` with the hue rounded to whole degrees.
    pub fn to_hsva_array(&self) -> [Component; 4] {
        let [h, s, v] = self.to_hsv_array();
        [h, s, v, self.alpha]
    }

    /// `rgb(r,g,b)`.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// `rgba(r,g,b,a)`.
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    /// `hsl(h,s,l)` with saturation and lightness as fractions.
    pub fn to_hsl_string(&self) -> String {
        let [h, s, l] = self.to_hsl_array();
        format!("hsl({},{},{})", h, s, l)
    }

    /// `hsla(h,s,l,a)` with saturation and lightness as fractions.
    pub fn to_hsla_string(&self) -> String {
        let [h, s, l, a] = self.to_hsla_array();
        format!("hsla({},{},{},{})", h, s, l, a)
    }

    /// `hsv(h,s%,v%)`.
    pub fn to_hsv_string(&self) -> String {
        let [h, s, v] = self.to_hsv_array();
        format!("hsv({},{}%,{}%)", h, s * 100.0, v * 100.0)
    }

    /// `hsva(h,s%,v%,a)`.
    pub fn to_hsva_string(&self) -> String {
        let [h, s, v, a] = self.to_hsva_array();
        format!("hsva({},{}%,{}%,{})", h, s * 100.0, v * 100.0, a)
    }

    /// Same as [`Color::to_hsv_array`].
    pub fn to_hsb_array(&self) -> [Component; 3] {
        self.to_hsv_array()
    }

    /// Same as [`Color::to_hsva_array`].
    pub fn to_hsba_array(&self) -> [Component; 4] {
        self.to_hsva_array()
    }

    /// `hsb(h,s%,b%)`.
    pub fn to_hsb_string(&self) -> String {
        let [h, s, b] = self.to_hsb_array();
        format!("hsb({},{}%,{}%)", h, s * 100.0, b * 100.0)
    }

    /// `hsba(h,s%,b%,a)`.
    pub fn to_hsba_string(&self) -> String {
        let [h, s, b, a] = self.to_hsba_array();
        format!("hsba({},{}%,{}%,{})", h, s * 100.0, b * 100.0, a)
    }

    /// Pack red, green and blue as `0xRRGGBB`. Alpha is dropped.
    pub fn to_integer(&self) -> u32 {
        u32::from_be_bytes([0, self.red, self.green, self.blue])
    }

    /// The first CSS name with exactly these bytes, if any.
    pub fn to_name(&self) -> Option<&'static str> {
        names::reverse_lookup(self.to_bytes())
    }
}

fn split_sequence(values: &[Component]) -> Result<[Component; 4]> {
    match *values {
        [a, b, c] => Ok([a, b, c, 1.0]),
        [a, b, c, alpha] => Ok([a, b, c, alpha]),
        _ => Err(Error::InvalidSequenceLength(values.len())),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.to_integer()
    }
}
