//! Runtime setting values and the marker-stripped color type.

use crate::constants::COLOR_MARKER;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error raised when a color string fails hex validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{input}': expected 6 or 8 hexadecimal digits")]
pub struct ColorError {
    /// The offending input, as given (marker included if present).
    pub input: String,
}

/// A 6- or 8-digit hexadecimal color, stored **without** the leading `#`.
///
/// Generated documents carry the bare digits; UI-facing accessors restore
/// the marker via [`HexColor::css`]. Both directions round-trip for every
/// valid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a color, accepting an optional leading `#`.
    ///
    /// # Errors
    /// Returns [`ColorError`] if the remainder is not exactly 6 or 8
    /// hexadecimal digits.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix(COLOR_MARKER).unwrap_or(input);
        let valid = matches!(digits.len(), 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(digits.to_owned()))
        } else {
            Err(ColorError { input: input.to_owned() })
        }
    }

    /// The bare digits, as stored in generated documents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UI-facing form with the `#` marker restored.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{COLOR_MARKER}{}", self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// The five setting kinds a plugin may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SettingKind {
    Checkbox,
    Text,
    Number,
    Color,
    Select,
}

/// A materialized setting value, one variant per declared kind.
///
/// Serializes untagged, so documents carry the bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Color(HexColor),
    Choice(String),
}

impl SettingValue {
    /// The kind this value materializes.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::Bool(_) => SettingKind::Checkbox,
            Self::Number(_) => SettingKind::Number,
            Self::Text(_) => SettingKind::Text,
            Self::Color(_) => SettingKind::Color,
            Self::Choice(_) => SettingKind::Select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_marker_and_keeps_digits() {
        let color = HexColor::parse("#313338").unwrap();
        assert_eq!(color.as_str(), "313338");
        assert_eq!(color.css(), "#313338");

        let bare = HexColor::parse("AabBcCdD").unwrap();
        assert_eq!(bare.as_str(), "AabBcCdD");
    }

    #[test]
    fn parse_rejects_bad_lengths_and_digits() {
        for input in ["#fff", "12345", "1234567", "#gggggg", "", "#"] {
            assert!(HexColor::parse(input).is_err(), "{input} should fail");
        }
    }

    #[test]
    fn value_serializes_as_bare_scalar() {
        let json = serde_json::to_value(SettingValue::Color(
            HexColor::parse("#313338").unwrap(),
        ))
        .unwrap();
        assert_eq!(json, serde_json::json!("313338"));

        let json = serde_json::to_value(SettingValue::Bool(true)).unwrap();
        assert_eq!(json, serde_json::json!(true));
    }
}
