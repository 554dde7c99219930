//! Kora instrument vocabulary
//!
//! The editor models the 12 strings reachable from the tablature buttons,
//! six per side. A string is written as its degree followed by the side
//! letter: `G` (gauche, left) or `D` (droite, right), e.g. `3G` or `1D`.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

use crate::errors::TabError;

/// Hand side of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Tablature letter for this side
    pub fn letter(self) -> char {
        match self {
            Side::Left => 'G',
            Side::Right => 'D',
        }
    }
}

/// One of the 12 strings addressable from the tablature tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId {
    side: Side,
    degree: u8,
}

impl StringId {
    pub const MAX_DEGREE: u8 = 6;

    /// Build a string id, rejecting degrees outside 1..=6
    pub fn new(side: Side, degree: u8) -> Result<Self, TabError> {
        if degree == 0 || degree > Self::MAX_DEGREE {
            return Err(TabError::UnknownString(format!("{}{}", degree, side.letter())));
        }
        Ok(Self { side, degree })
    }

    pub fn side(self) -> Side {
        self.side
    }

    pub fn degree(self) -> u8 {
        self.degree
    }

    /// Left strings in button order: 6G down to 1G
    pub fn left() -> Vec<StringId> {
        (1..=Self::MAX_DEGREE)
            .rev()
            .map(|degree| StringId { side: Side::Left, degree })
            .collect()
    }

    /// Right strings in button order: 1D up to 6D
    pub fn right() -> Vec<StringId> {
        (1..=Self::MAX_DEGREE)
            .map(|degree| StringId { side: Side::Right, degree })
            .collect()
    }

    /// All 12 strings, left to right across the instrument
    pub fn all() -> Vec<StringId> {
        let mut strings = Self::left();
        strings.extend(Self::right());
        strings
    }

    /// Tablature label, e.g. "3G"
    pub fn label(self) -> String {
        format!("{}{}", self.degree, self.side.letter())
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degree, self.side.letter())
    }
}

impl FromStr for StringId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();
        let (Some(digit), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(TabError::UnknownString(s.to_string()));
        };

        let side = match letter.to_ascii_uppercase() {
            'G' => Side::Left,
            'D' => Side::Right,
            _ => return Err(TabError::UnknownString(s.to_string())),
        };

        let degree = digit
            .to_digit(10)
            .ok_or_else(|| TabError::UnknownString(s.to_string()))?;

        Self::new(side, degree as u8).map_err(|_| TabError::UnknownString(s.to_string()))
    }
}

impl Serialize for StringId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StringId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Playing digit convention for a note
///
/// Encoded as a small integer across the JS boundary, matching the
/// radio selector's index (0 = auto, 1 = thumb, 2 = index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum FingerMode {
    #[default]
    Auto = 0,
    Thumb = 1,
    Index = 2,
}

impl FingerMode {
    pub fn all() -> [FingerMode; 3] {
        [FingerMode::Auto, FingerMode::Thumb, FingerMode::Index]
    }

    /// Label shown on the radio selector
    pub fn label(self) -> &'static str {
        match self {
            FingerMode::Auto => "Auto",
            FingerMode::Thumb => "Pouce",
            FingerMode::Index => "Index",
        }
    }

    pub fn from_u8(value: u8) -> Option<FingerMode> {
        match value {
            0 => Some(FingerMode::Auto),
            1 => Some(FingerMode::Thumb),
            2 => Some(FingerMode::Index),
            _ => None,
        }
    }
}

impl FromStr for FingerMode {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "0" => Ok(FingerMode::Auto),
            "thumb" | "pouce" | "p" | "1" => Ok(FingerMode::Thumb),
            "index" | "i" | "2" => Ok(FingerMode::Index),
            _ => Err(TabError::UnknownFingerMode(s.to_string())),
        }
    }
}

/// Duration class of a note, written as a glyph at the start of the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RhythmSymbol {
    #[default]
    Plus,
    Eighth,
    SixteenthGroup,
    SixteenthBeamed,
}

impl RhythmSymbol {
    pub fn all() -> [RhythmSymbol; 4] {
        [
            RhythmSymbol::Plus,
            RhythmSymbol::Eighth,
            RhythmSymbol::SixteenthGroup,
            RhythmSymbol::SixteenthBeamed,
        ]
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RhythmSymbol::Plus => "+",
            RhythmSymbol::Eighth => "♪",
            RhythmSymbol::SixteenthGroup => "♫",
            RhythmSymbol::SixteenthBeamed => "♬",
        }
    }
}

impl fmt::Display for RhythmSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for RhythmSymbol {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyph = s.trim();
        Self::all()
            .into_iter()
            .find(|r| r.glyph() == glyph)
            .ok_or_else(|| TabError::UnknownRhythm(s.to_string()))
    }
}

impl Serialize for RhythmSymbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

impl<'de> Deserialize<'de> for RhythmSymbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let glyph = String::deserialize(deserializer)?;
        glyph.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strings_in_button_order() {
        let labels: Vec<String> = StringId::all().into_iter().map(StringId::label).collect();
        assert_eq!(
            labels,
            vec!["6G", "5G", "4G", "3G", "2G", "1G", "1D", "2D", "3D", "4D", "5D", "6D"]
        );
    }

    #[test]
    fn test_parse_string_labels() {
        for string in StringId::all() {
            let parsed: StringId = string.label().parse().unwrap();
            assert_eq!(parsed, string);
        }
        assert_eq!("3g".parse::<StringId>().unwrap().label(), "3G");
    }

    #[test]
    fn test_reject_unknown_strings() {
        for bad in ["", "7G", "0D", "3X", "3GG", "G3", "12D"] {
            assert!(bad.parse::<StringId>().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_finger_mode_parsing() {
        assert_eq!("Thumb".parse::<FingerMode>().unwrap(), FingerMode::Thumb);
        assert_eq!("pouce".parse::<FingerMode>().unwrap(), FingerMode::Thumb);
        assert_eq!("index".parse::<FingerMode>().unwrap(), FingerMode::Index);
        assert_eq!("auto".parse::<FingerMode>().unwrap(), FingerMode::Auto);
        assert!("middle".parse::<FingerMode>().is_err());
        assert_eq!(FingerMode::from_u8(2), Some(FingerMode::Index));
        assert_eq!(FingerMode::from_u8(3), None);
    }

    #[test]
    fn test_rhythm_glyphs() {
        assert_eq!(RhythmSymbol::default().glyph(), "+");
        assert_eq!("♪".parse::<RhythmSymbol>().unwrap(), RhythmSymbol::Eighth);
        assert!("♩".parse::<RhythmSymbol>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&StringId::new(Side::Right, 4).unwrap()).unwrap();
        assert_eq!(json, "\"4D\"");
        let rhythm: RhythmSymbol = serde_json::from_str("\"♬\"").unwrap();
        assert_eq!(rhythm, RhythmSymbol::SixteenthBeamed);
        let mode: FingerMode = serde_json::from_str("1").unwrap();
        assert_eq!(mode, FingerMode::Thumb);
    }
}
