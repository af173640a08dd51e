//! Errors reported while building or deriving colors.

use thiserror::Error;

use crate::{channel::Keys, color::Component};

/// Everything that can go wrong when constructing or deriving a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No parser rule accepted the input.
    #[error("could not parse `{0}` as a color")]
    Parse(String),
    /// An ordered sequence was given where keyed channels are required.
    #[error("expected keyed channels, found the unkeyed sequence {0:?}")]
    UnkeyedSequence(Vec<Component>),
    /// A positional channel collection did not hold 3 or 4 values.
    #[error("expected 3 or 4 channel values, found {0}")]
    InvalidSequenceLength(usize),
    /// A required numeric parameter was NaN or infinite.
    #[error("`{name}` must be a finite number, found `{value}`")]
    NotFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was passed.
        value: Component,
    },
    /// A 1-based gradient slice outside of the gradient.
    #[error("slice {slice} is outside of a gradient with {slices} slices")]
    SliceOutOfRange {
        /// The requested slice.
        slice: usize,
        /// The number of slices in the gradient.
        slices: usize,
    },
    /// The keys of a channel map do not select a conversion path.
    #[error("channels {0:?} do not describe an RGB, HSL or HSV color")]
    IncompleteChannels(Keys),
    /// A parser rule pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::NotFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(name: &'static str, value: Component) -> Result<Component> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NotFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_input() {
        let err = Error::Parse("Asdfapofas dfoiajs".to_owned());
        assert_eq!(
            err.to_string(),
            "could not parse `Asdfapofas dfoiajs` as a color"
        );
    }

    #[test]
    fn finite_check() {
        assert_eq!(ensure_finite("by", 0.5), Ok(0.5));
        assert!(matches!(
            ensure_finite("by", Component::NAN),
            Err(Error::NotFinite { name: "by", .. })
        ));
    }
}
