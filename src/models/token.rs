//! Tablature tokens and the closed set of editor actions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::TabError;
use super::kora::{FingerMode, RhythmSymbol, StringId};

/// Control tools that insert a fixed literal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedTool {
    /// Next note sounds together with the previous one
    Simultaneous,
    Repeat,
    Silence,
    PageBreak,
    /// Placeholder the user edits into a free text annotation
    FreeText,
}

impl FixedTool {
    pub fn all() -> [FixedTool; 5] {
        [
            FixedTool::Simultaneous,
            FixedTool::Repeat,
            FixedTool::Silence,
            FixedTool::PageBreak,
            FixedTool::FreeText,
        ]
    }

    /// Literal line appended to the tablature
    pub fn literal(self) -> &'static str {
        match self {
            FixedTool::Simultaneous => "=",
            FixedTool::Repeat => "x2",
            FixedTool::Silence => "+ S",
            FixedTool::PageBreak => "+ PAGE",
            FixedTool::FreeText => "+ TXT Message",
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            FixedTool::Simultaneous => "= Simultané",
            FixedTool::Repeat => "x2 Répétition",
            FixedTool::Silence => "Silence",
            FixedTool::PageBreak => "Saut de page",
            FixedTool::FreeText => "Texte libre",
        }
    }

    /// Toast shown after insertion
    pub fn notification(self) -> &'static str {
        match self {
            FixedTool::Simultaneous => "Marqueur simultané ajouté",
            FixedTool::Repeat => "Répétition ajoutée",
            FixedTool::Silence => "Silence ajouté",
            FixedTool::PageBreak => "Saut de page ajouté",
            FixedTool::FreeText => "Texte ajouté (modifiez 'Message')",
        }
    }
}

impl FromStr for FixedTool {
    type Err = TabError;

    /// Accepts the literal itself ("x2") or the tool's snake_case id ("repeat")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::all()
            .into_iter()
            .find(|tool| tool.literal() == key)
            .or_else(|| serde_json::from_value(serde_json::Value::String(key.to_string())).ok())
            .ok_or_else(|| TabError::UnknownTool(s.to_string()))
    }
}

/// One UI event against the tablature, carrying only the data it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddNote {
        string: StringId,
        finger: FingerMode,
        rhythm: RhythmSymbol,
    },
    AddFixed {
        tool: FixedTool,
    },
    Undo,
}

/// Format a note token: "<rhythm> <string><suffix>"
pub fn format_note(rhythm: RhythmSymbol, string: StringId, suffix: &str) -> String {
    format!("{} {}{}", rhythm, string, suffix)
}
