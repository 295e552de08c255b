// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and declarative attribute parsing.
//!
//! Hosts that configure the carousel through markup attributes feed raw
//! `(name, value)` pairs through [`CarouselConfig::set_attribute`]. Parsing is
//! forgiving in the same way the platform's `parseFloat` is: `"10px"` reads
//! as `10`. Anything that cannot be used degrades to the documented default.

use alloc::string::ToString;
use core::fmt;

use crate::autoplay::DEFAULT_INTERVAL_MS;
use crate::error::ConfigError;
use crate::layout::{MAX_ITEMS_PER_VIEW, Peek, PeekType};
use crate::motion::DEFAULT_ELASTICITY;

/// Attributes recognized by [`CarouselConfig::set_attribute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `items-per-view`: slides per viewport, may be fractional (`>= 1`).
    ItemsPerView,
    /// `gap`: pixels between slides.
    Gap,
    /// `loop`: infinite looping.
    Loop,
    /// `peek`: trailing peek, pixels or percent of the container.
    Peek,
    /// `peek-type`: `hard` or `fade`.
    PeekType,
    /// `show-dots`: produce indicator state.
    ShowDots,
    /// `autoplay`: advance on a timer.
    Autoplay,
    /// `interval`: autoplay interval in milliseconds.
    Interval,
    /// `mousewheel`: wheel/trackpad navigation.
    Mousewheel,
}

impl Attribute {
    /// Every recognized attribute.
    pub const ALL: [Self; 9] = [
        Self::ItemsPerView,
        Self::Gap,
        Self::Loop,
        Self::Peek,
        Self::PeekType,
        Self::ShowDots,
        Self::Autoplay,
        Self::Interval,
        Self::Mousewheel,
    ];

    /// Looks up an attribute by its markup name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.name() == name)
            .ok_or_else(|| ConfigError::UnknownAttribute(name.to_string()))
    }

    /// Markup name of the attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ItemsPerView => "items-per-view",
            Self::Gap => "gap",
            Self::Loop => "loop",
            Self::Peek => "peek",
            Self::PeekType => "peek-type",
            Self::ShowDots => "show-dots",
            Self::Autoplay => "autoplay",
            Self::Interval => "interval",
            Self::Mousewheel => "mousewheel",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete carousel configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct CarouselConfig {
    /// Slides per viewport; fractional values show part of the next slide.
    pub items_per_view: f64,
    /// Pixels between adjacent slides.
    pub gap: f64,
    /// Infinite looping through cloned slides.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Trailing peek reserved in the viewport.
    pub peek: Peek,
    /// How the peeked region is presented.
    pub peek_type: PeekType,
    /// Produce indicator (dot) state.
    pub show_dots: bool,
    /// Advance automatically every `interval_ms`.
    pub autoplay: bool,
    /// Autoplay interval in milliseconds.
    #[cfg_attr(feature = "serde", serde(rename = "interval"))]
    pub interval_ms: u64,
    /// Navigate with wheel/trackpad gestures.
    pub mousewheel: bool,
    /// Fraction of the remaining distance closed per reference frame.
    pub elasticity: f64,
    /// Accumulated wheel delta that triggers one step.
    pub wheel_threshold: f64,
    /// Milliseconds of wheel input ignored after a step.
    pub wheel_cooldown_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_per_view: 1.0,
            gap: 0.0,
            looping: false,
            peek: Peek::default(),
            peek_type: PeekType::Hard,
            show_dots: false,
            autoplay: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            mousewheel: false,
            elasticity: DEFAULT_ELASTICITY,
            wheel_threshold: 50.0,
            wheel_cooldown_ms: 400,
        }
    }
}

impl CarouselConfig {
    /// Builds a configuration from markup attributes, degrading bad values.
    ///
    /// Unknown attributes are skipped.
    pub fn from_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = Self::default();
        for (name, value) in attributes {
            if let Err(err) = config.set_attribute(name, Some(value)) {
                tracing::warn!(attribute = name, %err, "ignoring carousel attribute value");
            }
        }
        config
    }

    /// Applies one markup attribute. `None` means the attribute was removed.
    ///
    /// On a parse error the affected field is reset to its default and the
    /// error is returned. Unknown names leave the configuration untouched.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let attribute = Attribute::from_name(name)?;
        let defaults = Self::default();
        match attribute {
            Attribute::ItemsPerView => {
                self.items_per_view = defaults.items_per_view;
                if let Some(value) = value {
                    self.items_per_view = parse_items_per_view(value)?;
                }
            }
            Attribute::Gap => {
                self.gap = defaults.gap;
                if let Some(value) = value {
                    self.gap = parse_gap(value)?;
                }
            }
            Attribute::Peek => {
                self.peek = defaults.peek;
                if let Some(value) = value {
                    self.peek = parse_peek(value)?;
                }
            }
            Attribute::PeekType => {
                self.peek_type = defaults.peek_type;
                if let Some(value) = value {
                    self.peek_type = parse_peek_type(value)?;
                }
            }
            Attribute::Interval => {
                self.interval_ms = defaults.interval_ms;
                if let Some(value) = value {
                    self.interval_ms = parse_interval(value)?;
                }
            }
            Attribute::Loop => self.looping = parse_flag(value),
            Attribute::ShowDots => self.show_dots = parse_flag(value),
            Attribute::Autoplay => self.autoplay = parse_flag(value),
            Attribute::Mousewheel => self.mousewheel = parse_flag(value),
        }
        Ok(())
    }
}

/// Parses `items-per-view`; values below 1 or above
/// [`MAX_ITEMS_PER_VIEW`] are rejected.
pub fn parse_items_per_view(value: &str) -> Result<f64, ConfigError> {
    let items = parse_number(Attribute::ItemsPerView, value)?;
    if !(1.0..=MAX_ITEMS_PER_VIEW).contains(&items) {
        return Err(ConfigError::OutOfRange {
            attribute: Attribute::ItemsPerView,
            value: items,
        });
    }
    Ok(items)
}

/// Parses `gap` in pixels; negative gaps are rejected.
pub fn parse_gap(value: &str) -> Result<f64, ConfigError> {
    let gap = parse_number(Attribute::Gap, value)?;
    if gap < 0.0 {
        return Err(ConfigError::OutOfRange {
            attribute: Attribute::Gap,
            value: gap,
        });
    }
    Ok(gap)
}

/// Parses `peek`: `"40"`, `"40px"`, or `"10%"`.
pub fn parse_peek(value: &str) -> Result<Peek, ConfigError> {
    let trimmed = value.trim();
    let (number, percent) = match trimmed.strip_suffix('%') {
        Some(number) => (number, true),
        None => (trimmed, false),
    };
    let amount = parse_number(Attribute::Peek, number)?;
    if amount < 0.0 {
        return Err(ConfigError::OutOfRange {
            attribute: Attribute::Peek,
            value: amount,
        });
    }
    Ok(if percent {
        Peek::Percent(amount)
    } else {
        Peek::Pixels(amount)
    })
}

/// Parses `peek-type` (case-insensitive).
pub fn parse_peek_type(value: &str) -> Result<PeekType, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("hard") {
        Ok(PeekType::Hard)
    } else if value.eq_ignore_ascii_case("fade") {
        Ok(PeekType::Fade)
    } else {
        Err(ConfigError::InvalidPeekType(value.to_string()))
    }
}

/// Parses `interval` as leading integer milliseconds; zero is rejected.
pub fn parse_interval(value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    let interval = digits
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            attribute: Attribute::Interval,
            value: value.to_string(),
        })?;
    if interval == 0 {
        return Err(ConfigError::OutOfRange {
            attribute: Attribute::Interval,
            value: 0.0,
        });
    }
    Ok(interval)
}

/// Presence-based boolean: any value except `"false"` enables the flag.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
}

/// Reads the longest numeric prefix of `value`, ignoring any unit suffix.
fn parse_number(attribute: Attribute, value: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidNumber {
        attribute,
        value: value.to_string(),
    };
    let prefix = numeric_prefix(value.trim_start());
    let number = prefix.parse::<f64>().map_err(|_| invalid())?;
    if number.is_finite() { Ok(number) } else { Err(invalid()) }
}

/// `[+-]? digits [. digits] ([eE] [+-]? digits)?`, as far as it matches.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    end = digits_from(end);
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.items_per_view, 1.0);
        assert_eq!(config.interval_ms, 3000);
        assert_eq!(config.elasticity, 0.12);
        assert_eq!(config.wheel_threshold, 50.0);
        assert_eq!(config.wheel_cooldown_ms, 400);
        assert_eq!(config.peek_type, PeekType::Hard);
        assert!(!config.looping);
    }

    #[test]
    fn numbers_accept_unit_suffixes() {
        assert_eq!(parse_gap("10px"), Ok(10.0));
        assert_eq!(parse_gap(" 12.5 "), Ok(12.5));
        assert_eq!(parse_items_per_view("2.5"), Ok(2.5));
        assert_eq!(parse_items_per_view("3items"), Ok(3.0));
        assert_eq!(parse_items_per_view("1e1"), Ok(10.0));
        assert_eq!(parse_interval("2500ms"), Ok(2500));
    }

    #[test]
    fn unparsable_numbers_are_errors() {
        assert_eq!(
            parse_items_per_view("wide"),
            Err(ConfigError::InvalidNumber {
                attribute: Attribute::ItemsPerView,
                value: "wide".into(),
            })
        );
        assert!(parse_gap("").is_err());
        assert!(parse_gap("-").is_err());
        assert!(parse_interval("soon").is_err());
    }

    #[test]
    fn out_of_range_values_are_errors() {
        assert!(matches!(
            parse_items_per_view("0.5"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_items_per_view("1e300"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_items_per_view("101"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert_eq!(parse_items_per_view("100"), Ok(100.0));
        assert!(matches!(
            parse_gap("-3"),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_interval("0"),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn peek_forms() {
        assert_eq!(parse_peek("40"), Ok(Peek::Pixels(40.0)));
        assert_eq!(parse_peek("40px"), Ok(Peek::Pixels(40.0)));
        assert_eq!(parse_peek("15%"), Ok(Peek::Percent(15.0)));
        assert!(parse_peek("lots").is_err());
        assert_eq!(parse_peek_type("FADE"), Ok(PeekType::Fade));
        assert_eq!(
            parse_peek_type("blur"),
            Err(ConfigError::InvalidPeekType("blur".into()))
        );
    }

    #[test]
    fn flags_are_presence_based() {
        assert!(parse_flag(Some("")));
        assert!(parse_flag(Some("loop")));
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn bad_values_degrade_to_defaults() {
        let mut config = CarouselConfig::default();
        config.set_attribute("items-per-view", Some("3")).unwrap();
        config.set_attribute("interval", Some("5000")).unwrap();
        assert_eq!(config.items_per_view, 3.0);

        assert!(config.set_attribute("items-per-view", Some("many")).is_err());
        assert_eq!(config.items_per_view, 1.0);
        assert!(config.set_attribute("interval", Some("")).is_err());
        assert_eq!(config.interval_ms, 3000);
    }

    #[test]
    fn removing_an_attribute_restores_default() {
        let mut config = CarouselConfig::default();
        config.set_attribute("gap", Some("16")).unwrap();
        config.set_attribute("loop", Some("")).unwrap();
        config.set_attribute("gap", None).unwrap();
        config.set_attribute("loop", None).unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn unknown_attribute_is_reported_and_ignored() {
        let mut config = CarouselConfig::default();
        assert_eq!(
            config.set_attribute("speed", Some("9")),
            Err(ConfigError::UnknownAttribute("speed".into()))
        );
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn from_attributes_collects_everything() {
        let config = CarouselConfig::from_attributes([
            ("items-per-view", "2.5"),
            ("gap", "12px"),
            ("loop", ""),
            ("peek", "10%"),
            ("peek-type", "fade"),
            ("show-dots", ""),
            ("autoplay", ""),
            ("interval", "not-a-number"),
            ("mousewheel", "false"),
            ("data-extra", "x"),
        ]);
        assert_eq!(config.items_per_view, 2.5);
        assert_eq!(config.gap, 12.0);
        assert!(config.looping);
        assert_eq!(config.peek, Peek::Percent(10.0));
        assert_eq!(config.peek_type, PeekType::Fade);
        assert!(config.show_dots);
        assert!(config.autoplay);
        assert_eq!(config.interval_ms, 3000);
        assert!(!config.mousewheel);
    }

    #[test]
    fn attribute_names_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_name(attr.name()), Ok(attr));
        }
    }
}
