//! An ordered list of rules that turn text into keyed channels.
//!
//! Rules are tried in registration order and the first rule whose pattern
//! matches and whose extractor returns channels wins. A rule may match
//! structurally and still decline, in which case the next rule is tried.

use std::{borrow::Cow, fmt, sync::Arc};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    channel::{ChannelMap, Keys, RgbScale},
    color::Component,
    convert::hex_to_rgb,
    error::{Error, Result},
    math::{clamp_byte, clamp_unit},
    names,
};

/// Signature of the function that turns a pattern match into channels.
pub type Extractor = dyn Fn(&Captures<'_>) -> Option<ChannelMap> + Send + Sync;

/// A pattern paired with an extractor.
#[derive(Clone)]
pub struct ParserRule {
    name: Cow<'static, str>,
    pattern: Regex,
    examples: Vec<Cow<'static, str>>,
    extract: Arc<Extractor>,
}

impl ParserRule {
    /// Create a rule from a regular expression and an extractor.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        pattern: &str,
        extract: impl Fn(&Captures<'_>) -> Option<ChannelMap> + Send + Sync + 'static,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            examples: Vec::new(),
            extract: Arc::new(extract),
        })
    }

    /// Attach example inputs this rule is expected to accept.
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// The name of the rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern tested against the input.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Example inputs this rule accepts.
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|e| e.as_ref())
    }

    /// Run this rule on its own, returning `None` if it does not match or
    /// declines.
    pub fn apply(&self, input: &str) -> Option<ChannelMap> {
        let captures = self.pattern.captures(input)?;
        let channels = (self.extract)(&captures);
        if channels.is_none() {
            log::debug!("rule `{}` matched `{}` but declined", self.name, input);
        }
        channels
    }
}

impl fmt::Debug for ParserRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("examples", &self.examples)
            .finish_non_exhaustive()
    }
}

/// An ordered, user-extensible list of [`ParserRule`]s.
#[derive(Clone, Debug)]
pub struct ParserRegistry {
    rules: Vec<ParserRule>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ParserRegistry {
    /// Create a registry without any rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry holding the built-in rules: decimal integers, 3 and
    /// 6 digit hex, `rgb()`, `hsl()`/`hsv()`/`hsb()` and color names.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Append a rule, to be tried after every existing rule.
    pub fn push(&mut self, rule: ParserRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Insert a rule at `index`, or at the end if `index` is past it.
    pub fn insert(&mut self, index: usize, rule: ParserRule) -> &mut Self {
        let index = index.min(self.rules.len());
        self.rules.insert(index, rule);
        self
    }

    /// Replace every rule with `rules`.
    pub fn replace(&mut self, rules: impl IntoIterator<Item = ParserRule>) -> &mut Self {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Remove every rule.
    pub fn clear(&mut self) -> &mut Self {
        self.rules.clear();
        self
    }

    /// The rules in the order they are tried.
    pub fn rules(&self) -> &[ParserRule] {
        &self.rules
    }

    /// Parse `input` with the first rule that accepts it. Surrounding white
    /// space is ignored.
    pub fn parse(&self, input: &str) -> Result<ChannelMap> {
        let trimmed = input.trim();
        for rule in &self.rules {
            if let Some(channels) = rule.apply(trimmed) {
                log::trace!("rule `{}` accepted `{}`", rule.name, trimmed);
                return Ok(channels);
            }
        }
        log::debug!("no rule accepted `{}`", input);
        Err(Error::Parse(input.to_owned()))
    }
}

static STANDARD: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::standard);

/// The process-wide registry of built-in rules.
pub fn standard_registry() -> &'static ParserRegistry {
    &STANDARD
}

const NUMBER: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)";

fn number(captures: &Captures<'_>, index: usize) -> Option<Component> {
    captures.get(index)?.as_str().parse().ok()
}

fn rgb_bytes(rgb: [u8; 3]) -> ChannelMap {
    let [red, green, blue] = rgb;
    ChannelMap::new()
        .with(Keys::R, red.into())
        .with(Keys::G, green.into())
        .with(Keys::B, blue.into())
        .with_scale(RgbScale::Bytes)
}

/// A byte, or a percentage of 255.
fn rgb_channel(text: &str) -> Option<Component> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<Component>().ok()? * 2.55,
        None => text.parse().ok()?,
    };
    Some(clamp_byte(value))
}

/// A percentage, or a bare unit fraction.
fn unit_channel(text: &str) -> Option<Component> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<Component>().ok()? / 100.0,
        None => text.parse().ok()?,
    };
    Some(clamp_unit(value))
}

fn with_alpha(channels: ChannelMap, captures: &Captures<'_>, index: usize) -> Option<ChannelMap> {
    match captures.get(index) {
        Some(alpha) => {
            let alpha = alpha.as_str().parse::<Component>().ok()?;
            Some(channels.with(Keys::A, clamp_unit(alpha)))
        }
        None => Some(channels),
    }
}

fn decimal(captures: &Captures<'_>) -> Option<ChannelMap> {
    let value = captures.get(0)?.as_str().parse::<u64>().ok()?;
    let [_, red, green, blue] = ((value & 0xFF_FFFF) as u32).to_be_bytes();
    Some(rgb_bytes([red, green, blue]))
}

fn hex(captures: &Captures<'_>) -> Option<ChannelMap> {
    hex_to_rgb(captures.get(0)?.as_str()).ok().map(rgb_bytes)
}

fn rgb(captures: &Captures<'_>) -> Option<ChannelMap> {
    let channels = ChannelMap::new()
        .with(Keys::R, rgb_channel(captures.get(1)?.as_str())?)
        .with(Keys::G, rgb_channel(captures.get(2)?.as_str())?)
        .with(Keys::B, rgb_channel(captures.get(3)?.as_str())?)
        .with_scale(RgbScale::Bytes);
    with_alpha(channels, captures, 4)
}

fn hue_based(captures: &Captures<'_>) -> Option<ChannelMap> {
    let third = match captures.get(1)?.as_str().to_ascii_lowercase().as_str() {
        "l" => Keys::L,
        _ => Keys::V,
    };
    let channels = ChannelMap::new()
        .with(Keys::H, number(captures, 2)?)
        .with(Keys::S, unit_channel(captures.get(3)?.as_str())?)
        .with(third, unit_channel(captures.get(4)?.as_str())?);
    with_alpha(channels, captures, 5)
}

fn named(captures: &Captures<'_>) -> Option<ChannelMap> {
    names::lookup(captures.get(0)?.as_str()).map(|named| rgb_bytes(named.rgb))
}

fn standard_rules() -> Vec<ParserRule> {
    let channel = format!(r"({NUMBER}%?)");
    let alpha = format!(r"(?:\s*,\s*({NUMBER}))?");

    let rules = [
        ParserRule::new("decimal", r"^\d+$", decimal)
            .map(|r| r.with_examples(["3554431", "16809984"])),
        ParserRule::new("hex3", r"(?i)^#?[0-9a-f]{3}$", hex)
            .map(|r| r.with_examples(["#fb0", "f0f"])),
        ParserRule::new("hex6", r"(?i)^#?[0-9a-f]{6}$", hex)
            .map(|r| r.with_examples(["#00ff00", "336699"])),
        ParserRule::new(
            "rgb",
            &format!(r"(?i)^rgba?\(\s*{channel}\s*,\s*{channel}\s*,\s*{channel}{alpha}\s*\)$"),
            rgb,
        )
        .map(|r| {
            r.with_examples([
                "rgb(123, 234, 45)",
                "rgb(25, 50%, 100%)",
                "rgba(12%, 34, 56%, 0.78)",
            ])
        }),
        ParserRule::new(
            "hsx",
            &format!(
                r"(?i)^hs([lvb])a?\(\s*({NUMBER})(?:deg)?\s*,\s*{channel}\s*,\s*{channel}{alpha}\s*\)$"
            ),
            hue_based,
        )
        .map(|r| {
            r.with_examples([
                "hsl(123, 34%, 45%)",
                "hsla(25, 50%, 100%, 0.75)",
                "hsv(12, 34%, 56%)",
                "hsb(200deg, 0.5, 0.5)",
            ])
        }),
        ParserRule::new("named", r"(?i)^[a-z]+$", named)
            .map(|r| r.with_examples(["red", "RebeccaPurple"])),
    ];

    rules
        .into_iter()
        .map(|rule| rule.expect("built-in parser patterns are valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn rgb_of(channels: &ChannelMap) -> [Component; 3] {
        [
            channels.get(Keys::R).unwrap(),
            channels.get(Keys::G).unwrap(),
            channels.get(Keys::B).unwrap(),
        ]
    }

    #[test]
    fn rules_accept_their_examples() {
        for rule in standard_registry().rules() {
            assert!(rule.examples().count() > 0, "{}", rule.name());
            for example in rule.examples() {
                assert!(rule.apply(example).is_some(), "{}: {}", rule.name(), example);
            }
        }
    }

    #[test]
    fn rule_order() {
        let names = standard_registry()
            .rules()
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["decimal", "hex3", "hex6", "rgb", "hsx", "named"]);
    }

    #[test]
    fn decimal_is_packed_rgb() {
        let channels = standard_registry().parse("65535").unwrap();
        assert_eq!(rgb_of(&channels), [0.0, 255.0, 255.0]);
        assert_eq!(channels.scale(), RgbScale::Bytes);

        // Only the low 24 bits are used.
        let channels = standard_registry().parse("16809984").unwrap();
        assert_eq!(rgb_of(&channels), [0.0, 128.0, 0.0]);
    }

    #[test]
    fn digits_only_prefer_decimal() {
        let channels = standard_registry().parse("336699").unwrap();
        assert_eq!(rgb_of(&channels), [5.0, 35.0, 59.0]);
        let channels = standard_registry().parse("#336699").unwrap();
        assert_eq!(rgb_of(&channels), [51.0, 102.0, 153.0]);
    }

    #[test]
    fn hex_is_case_insensitive() {
        let channels = standard_registry().parse("#FfbB00").unwrap();
        assert_eq!(rgb_of(&channels), [255.0, 187.0, 0.0]);
        let channels = standard_registry().parse("fB0").unwrap();
        assert_eq!(rgb_of(&channels), [255.0, 187.0, 0.0]);
    }

    #[test]
    fn rgb_clamps() {
        let channels = standard_registry().parse("rgb(300, -10, 128)").unwrap();
        assert_eq!(rgb_of(&channels), [255.0, 0.0, 128.0]);
        assert_eq!(channels.get(Keys::A), None);

        let channels = standard_registry().parse("rgba(50%, 0, 200%, 1.5)").unwrap();
        let [r, g, b] = rgb_of(&channels);
        assert_component_eq!(r, 127.5);
        assert_eq!((g, b), (0.0, 255.0));
        assert_eq!(channels.get(Keys::A), Some(1.0));
    }

    #[test]
    fn hue_based_notations() {
        let channels = standard_registry().parse("hsla(0,150%,50%,2)").unwrap();
        assert_eq!(channels.keys(), Keys::HSL | Keys::A);
        assert_eq!(channels.get(Keys::S), Some(1.0));
        assert_eq!(channels.get(Keys::A), Some(1.0));

        let channels = standard_registry().parse("HSB(-90, 20%, 40%)").unwrap();
        assert_eq!(channels.keys(), Keys::HSV);
        assert_eq!(channels.get(Keys::H), Some(-90.0));
        assert_component_eq!(channels.get(Keys::V).unwrap(), 0.4);

        let channels = standard_registry().parse("hsl(120,1,0.25)").unwrap();
        assert_eq!(channels.get(Keys::S), Some(1.0));
        assert_eq!(channels.get(Keys::L), Some(0.25));
    }

    #[test]
    fn named_colors() {
        let channels = standard_registry().parse("  DarkGreen ").unwrap();
        assert_eq!(rgb_of(&channels), [0.0, 100.0, 0.0]);
    }

    #[test]
    fn failures_carry_the_input() {
        assert_eq!(
            standard_registry().parse("Asdfapofas dfoiajs"),
            Err(Error::Parse("Asdfapofas dfoiajs".to_owned()))
        );
        assert!(standard_registry().parse("notacolor").is_err());
        assert!(standard_registry().parse("rgb(1, 2)").is_err());
        assert!(standard_registry().parse("").is_err());
    }

    #[test]
    fn registry_is_extensible() {
        let grey = ParserRule::new("grey", r"^grey\((\d+)\)$", |c| {
            let v = number(c, 1)?;
            Some(rgb_bytes([v as u8, v as u8, v as u8]))
        })
        .unwrap();

        let mut registry = ParserRegistry::new();
        assert!(registry.parse("grey(7)").is_err());
        registry.push(grey.clone());
        assert_eq!(rgb_of(&registry.parse("grey(7)").unwrap()), [7.0; 3]);
        assert!(registry.parse("red").is_err());

        let mut registry = ParserRegistry::standard();
        registry.insert(0, grey);
        assert_eq!(registry.rules()[0].name(), "grey");
        registry.replace(Vec::new());
        assert!(registry.rules().is_empty());
    }

    #[test]
    fn declining_falls_through() {
        let mut registry = ParserRegistry::new();
        registry
            .push(ParserRule::new("never", r".*", |_| None).unwrap())
            .push(ParserRule::new("always", r".*", |_| Some(rgb_bytes([1, 2, 3]))).unwrap());
        assert_eq!(rgb_of(&registry.parse("x").unwrap()), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn invalid_patterns_are_errors() {
        assert!(matches!(
            ParserRule::new("broken", "(", |_| None),
            Err(Error::Pattern(_))
        ));
    }
}
