//! Blend colors channel by channel.
//!
//! The pairwise methods keep the alpha of the left color. The free functions
//! reduce a sequence from left to right and return `None` when it is empty.

use crate::{
    color::{Color, Component},
    error::{ensure_finite, Result},
    math::{clamp_unit, lerp, to_byte},
};

impl Color {
    fn combine(&self, other: &Color, f: impl Fn(u16, u16) -> u16) -> Color {
        let [r0, g0, b0] = self.to_bytes();
        let [r1, g1, b1] = other.to_bytes();
        let channel = |a: u8, b: u8| f(a.into(), b.into()).min(255) as u8;
        Color::from_bytes(channel(r0, r1), channel(g0, g1), channel(b0, b1))
            .with_alpha(self.alpha())
    }

    /// Add each channel, saturating at 255.
    pub fn additive(&self, other: &Color) -> Color {
        self.combine(other, |a, b| a + b)
    }

    /// Add each channel and subtract 255, saturating at 0.
    pub fn subtractive(&self, other: &Color) -> Color {
        self.combine(other, |a, b| (a + b).saturating_sub(255))
    }

    /// Multiply each channel, `a * b / 255` rounded down.
    pub fn multiply(&self, other: &Color) -> Color {
        self.combine(other, |a, b| a * b / 255)
    }

    /// The integer mean of each channel.
    pub fn average(&self, other: &Color) -> Color {
        self.combine(other, |a, b| (a + b) >> 1)
    }

    /// Place this color over `bottom` at `opacity`, given in `[0, 1]` or, when
    /// larger than 1, in `[0, 100]`. Each channel moves towards `bottom` by
    /// `opacity - 1 + bottom.alpha()`, clamped to `[0, 1]`. The result is
    /// opaque.
    pub fn overlay(&self, bottom: &Color, opacity: Component) -> Result<Color> {
        let opacity = ensure_finite("opacity", opacity)?;
        let opacity = if opacity > 1.0 { opacity / 100.0 } else { opacity };
        let t = clamp_unit(opacity - 1.0 + bottom.alpha());

        let [r0, g0, b0] = self.to_bytes();
        let [r1, g1, b1] = bottom.to_bytes();
        let channel = |a: u8, b: u8| to_byte(lerp(Component::from(a), Component::from(b), t));

        Ok(Color::from_bytes(
            channel(r0, r1),
            channel(g0, g1),
            channel(b0, b1),
        ))
    }
}

fn reduce<'a>(
    colors: impl IntoIterator<Item = &'a Color>,
    f: impl Fn(&Color, &Color) -> Color,
) -> Option<Color> {
    let mut colors = colors.into_iter();
    let first = *colors.next()?;
    Some(colors.fold(first, |acc, color| f(&acc, color)))
}

/// [`Color::additive`] over a sequence.
pub fn additive<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Option<Color> {
    reduce(colors, Color::additive)
}

/// [`Color::subtractive`] over a sequence.
pub fn subtractive<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Option<Color> {
    reduce(colors, Color::subtractive)
}

/// [`Color::multiply`] over a sequence.
pub fn multiply<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Option<Color> {
    reduce(colors, Color::multiply)
}

/// [`Color::average`] over a sequence.
pub fn average<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Option<Color> {
    reduce(colors, Color::average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, names};

    #[test]
    fn additive_saturates() {
        let red = Color::new("#FF0000").unwrap();
        let lime = Color::new("#00FF00").unwrap();
        assert_eq!(red.additive(&lime).to_hex_string(), "#FFFF00");
        assert_eq!(
            additive(&[red, lime, red]).map(|c| c.to_hex_string()),
            Some("#FFFF00".to_owned())
        );
        let grey = Color::from_bytes(200, 200, 200);
        assert_eq!(grey.additive(&grey).to_bytes(), [255; 3]);
    }

    #[test]
    fn subtractive_floors() {
        let yellow = names::YELLOW.to_color();
        let magenta = names::MAGENTA.to_color();
        assert_eq!(yellow.subtractive(&magenta).to_hex_string(), "#FF0000");
        assert_eq!(
            subtractive(&[yellow, magenta]).map(|c| c.to_hex_string()),
            Some("#FF0000".to_owned())
        );
    }

    #[test]
    fn multiply_rounds_down() {
        let a = names::LIGHTGOLDENRODYELLOW.to_color();
        let b = names::LIGHTBLUE.to_color();
        assert_eq!(a.multiply(&b).to_hex_string(), "#A9D3BD");
        assert_eq!(
            multiply(&[a, names::WHITE.to_color()]).map(|c| c.to_bytes()),
            Some(a.to_bytes())
        );
    }

    #[test]
    fn average_is_integer() {
        let a = Color::from_bytes(1, 10, 255);
        let b = Color::from_bytes(2, 20, 0);
        assert_eq!(a.average(&b).to_bytes(), [1, 15, 127]);
        assert_eq!(average(&[a, b]).map(|c| c.to_bytes()), Some([1, 15, 127]));
    }

    #[test]
    fn empty_sequences() {
        assert_eq!(additive(&Vec::<Color>::new()), None);
        assert_eq!(average(Vec::<&Color>::new()), None);
    }

    #[test]
    fn single_color_is_returned() {
        let red = names::RED.to_color();
        assert_eq!(multiply(&[red]), Some(red));
    }

    #[test]
    fn blends_keep_left_alpha() {
        let red = names::RED.to_color().with_alpha(0.5);
        let blue = names::BLUE.to_color();
        assert_eq!(red.additive(&blue).alpha(), 0.5);
        assert_eq!(blue.additive(&red).alpha(), 1.0);
    }

    #[test]
    fn overlay() {
        let red = names::RED.to_color();
        let green = names::GREEN.to_color();
        assert_eq!(red.overlay(&green, 0.4).unwrap().to_hex_string(), "#993300");
        assert_eq!(red.overlay(&green, 40.0).unwrap().to_hex_string(), "#993300");

        // A translucent bottom shows less of itself.
        let faded = green.with_alpha(0.5);
        assert_eq!(red.overlay(&faded, 0.4).unwrap().to_hex_string(), "#FF0000");
        assert_eq!(red.overlay(&faded, 1.0).unwrap().to_hex_string(), "#804000");

        assert!(matches!(
            red.overlay(&green, Component::NAN),
            Err(Error::NotFinite {
                name: "opacity",
                ..
            })
        ));
    }
}
