//! Panel layout for the tablature tab
//!
//! Framework-neutral description of the controls the host renders: two
//! columns of string buttons, the finger and rhythm radio selectors, and
//! the tool row. Each button carries the [`Action`] it triggers.

use serde::{Deserialize, Serialize};

use crate::models::{Action, FingerMode, FixedTool, RhythmSymbol, StringId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringButton {
    pub string: StringId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption {
    pub value: serde_json::Value,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioSelector {
    pub id: String,
    pub label: String,
    pub options: Vec<RadioOption>,
    pub default_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolButton {
    pub label: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub left_strings: Vec<StringButton>,
    pub right_strings: Vec<StringButton>,
    pub finger_mode: RadioSelector,
    pub rhythm: RadioSelector,
    pub tools: Vec<ToolButton>,
}

impl PanelLayout {
    /// Standard panel: 6 left strings, 6 right strings, 2 selectors, 6 tools
    pub fn standard() -> Self {
        let button = |string: StringId| StringButton {
            string,
            label: string.label(),
        };

        let finger_mode = RadioSelector {
            id: "finger_mode".to_string(),
            label: "Doigt".to_string(),
            options: FingerMode::all()
                .iter()
                .map(|mode| RadioOption {
                    value: serde_json::Value::from(*mode as u8),
                    label: mode.label().to_string(),
                })
                .collect(),
            default_index: FingerMode::default() as usize,
        };

        let rhythms = RhythmSymbol::all();
        let rhythm = RadioSelector {
            id: "rhythm".to_string(),
            label: "Rythme".to_string(),
            options: rhythms
                .iter()
                .map(|r| RadioOption {
                    value: serde_json::Value::from(r.glyph()),
                    label: r.glyph().to_string(),
                })
                .collect(),
            default_index: rhythms
                .iter()
                .position(|r| *r == RhythmSymbol::default())
                .unwrap_or(0),
        };

        let mut tools = vec![ToolButton {
            label: "↩️ Annuler".to_string(),
            action: Action::Undo,
        }];
        tools.extend(FixedTool::all().into_iter().map(|tool| ToolButton {
            label: tool.label().to_string(),
            action: Action::AddFixed { tool },
        }));

        Self {
            left_strings: StringId::left().into_iter().map(button).collect(),
            right_strings: StringId::right().into_iter().map(button).collect(),
            finger_mode,
            rhythm,
            tools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_counts() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.left_strings.len(), 6);
        assert_eq!(layout.right_strings.len(), 6);
        assert_eq!(layout.finger_mode.options.len(), 3);
        assert_eq!(layout.rhythm.options.len(), 4);
        assert_eq!(layout.tools.len(), 6);
        assert_eq!(layout.tools[0].action, Action::Undo);
    }

    #[test]
    fn test_string_columns_meet_in_the_middle() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.left_strings[0].label, "6G");
        assert_eq!(layout.left_strings[5].label, "1G");
        assert_eq!(layout.right_strings[0].label, "1D");
        assert_eq!(layout.right_strings[5].label, "6D");
    }

    #[test]
    fn test_defaults_point_at_auto_and_plus() {
        let layout = PanelLayout::standard();
        let finger = &layout.finger_mode.options[layout.finger_mode.default_index];
        assert_eq!(finger.label, "Auto");
        let rhythm = &layout.rhythm.options[layout.rhythm.default_index];
        assert_eq!(rhythm.value, serde_json::json!("+"));
    }
}
