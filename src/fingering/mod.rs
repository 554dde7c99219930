//! Finger suffix resolution
//!
//! A note token ends with a suffix naming the finger that plucks it. The
//! suffix comes from a [`FingerResolver`], injected into the appender so a
//! host can substitute its own convention. [`FingeringTable`] is the
//! default resolver, configured by `config/fingering.yaml`.

use serde::{Deserialize, Serialize};

use crate::errors::TabError;
use crate::models::{FingerMode, Side, StringId};

/// Fingering configuration shipped with the crate
pub const DEFAULT_FINGERING_YAML: &str = include_str!("../../config/fingering.yaml");

/// Result of a finger lookup: the token suffix and a readable finger name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerSuffix {
    pub suffix: String,
    pub name: String,
}

/// Resolves the suffix written after a string label
pub trait FingerResolver {
    fn resolve(&self, string: StringId, mode: FingerMode) -> FingerSuffix;
}

impl<F> FingerResolver for F
where
    F: Fn(StringId, FingerMode) -> FingerSuffix,
{
    fn resolve(&self, string: StringId, mode: FingerMode) -> FingerSuffix {
        self(string, mode)
    }
}

/// An explicit finger: its suffix and display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerEntry {
    pub suffix: String,
    pub name: String,
}

/// Finger used by `auto` mode for a given degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoFinger {
    Thumb,
    Index,
}

/// Per-side default fingers, indexed by degree - 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoFingering {
    pub left: Vec<AutoFinger>,
    pub right: Vec<AutoFinger>,
}

/// Table-driven finger resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingeringTable {
    pub thumb: FingerEntry,
    pub index: FingerEntry,
    #[serde(default)]
    pub auto_suffix: String,
    pub auto: AutoFingering,
}

impl FingeringTable {
    /// Parse and validate a fingering table from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, TabError> {
        let table: FingeringTable = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TabError> {
        let expected = StringId::MAX_DEGREE as usize;
        for (side, fingers) in [("left", &self.auto.left), ("right", &self.auto.right)] {
            if fingers.len() != expected {
                return Err(TabError::Config(format!(
                    "auto.{} lists {} fingers, expected {}",
                    side,
                    fingers.len(),
                    expected
                )));
            }
        }
        Ok(())
    }

    /// Default finger `auto` mode assigns to a string
    pub fn auto_finger(&self, string: StringId) -> AutoFinger {
        let fingers = match string.side() {
            Side::Left => &self.auto.left,
            Side::Right => &self.auto.right,
        };
        fingers
            .get(string.degree() as usize - 1)
            .copied()
            .unwrap_or(AutoFinger::Thumb)
    }

    fn entry(&self, finger: AutoFinger) -> &FingerEntry {
        match finger {
            AutoFinger::Thumb => &self.thumb,
            AutoFinger::Index => &self.index,
        }
    }
}

impl Default for FingeringTable {
    fn default() -> Self {
        use AutoFinger::{Index, Thumb};

        let per_side = vec![Thumb, Thumb, Thumb, Thumb, Index, Index];
        Self {
            thumb: FingerEntry { suffix: "P".to_string(), name: "pouce".to_string() },
            index: FingerEntry { suffix: "I".to_string(), name: "index".to_string() },
            auto_suffix: String::new(),
            auto: AutoFingering { left: per_side.clone(), right: per_side },
        }
    }
}

impl FingerResolver for FingeringTable {
    fn resolve(&self, string: StringId, mode: FingerMode) -> FingerSuffix {
        match mode {
            FingerMode::Thumb => FingerSuffix {
                suffix: self.thumb.suffix.clone(),
                name: self.thumb.name.clone(),
            },
            FingerMode::Index => FingerSuffix {
                suffix: self.index.suffix.clone(),
                name: self.index.name.clone(),
            },
            FingerMode::Auto => FingerSuffix {
                suffix: self.auto_suffix.clone(),
                name: self.entry(self.auto_finger(string)).name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(label: &str) -> StringId {
        label.parse().unwrap()
    }

    #[test]
    fn test_shipped_config_matches_default() {
        let table = FingeringTable::from_yaml(DEFAULT_FINGERING_YAML).unwrap();
        assert_eq!(table, FingeringTable::default());
    }

    #[test]
    fn test_explicit_modes() {
        let table = FingeringTable::default();
        let thumb = table.resolve(string("3G"), FingerMode::Thumb);
        assert_eq!(thumb.suffix, "P");
        assert_eq!(thumb.name, "pouce");

        let index = table.resolve(string("5D"), FingerMode::Index);
        assert_eq!(index.suffix, "I");
        assert_eq!(index.name, "index");
    }

    #[test]
    fn test_auto_mode_has_no_suffix_and_names_default_finger() {
        let table = FingeringTable::default();
        let low = table.resolve(string("2D"), FingerMode::Auto);
        assert_eq!(low.suffix, "");
        assert_eq!(low.name, "pouce");

        let high = table.resolve(string("6G"), FingerMode::Auto);
        assert_eq!(high.name, "index");
    }

    #[test]
    fn test_rejects_short_auto_table() {
        let yaml = r#"
thumb: { suffix: "T", name: "thumb" }
index: { suffix: "X", name: "index" }
auto:
  left: [thumb, index]
  right: [thumb, thumb, thumb, thumb, index, index]
"#;
        assert!(matches!(FingeringTable::from_yaml(yaml), Err(TabError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        assert!(matches!(
            FingeringTable::from_yaml("thumb: [unterminated"),
            Err(TabError::Config(_))
        ));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |s: StringId, _mode: FingerMode| FingerSuffix {
            suffix: format!("~{}", s.degree()),
            name: "custom".to_string(),
        };
        assert_eq!(resolver.resolve(string("4D"), FingerMode::Auto).suffix, "~4");
    }
}
