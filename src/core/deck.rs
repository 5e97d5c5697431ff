//! # Flashcards
//!
//! The records returned by the generation service. The client never edits
//! them: a deck is replaced wholesale each time a generation succeeds.
//!
//! Two record shapes are accepted:
//!
//! ```text
//! { "Title": "...", "Front side": "...", "Back side": "..." }   → Flashcard::Sided
//! { "Definition": "...", "Example": "..." }                    → Flashcard::Sections
//! ```
//!
//! The second shape is what the service produced before it settled on
//! title/front/back. It has no back side, so it renders as labelled blocks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A card with a front and a back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SidedCard {
    #[serde(
        rename = "Title",
        alias = "title",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub title: String,
    #[serde(rename = "Front side", alias = "front")]
    pub front: String,
    #[serde(rename = "Back side", alias = "back")]
    pub back: String,
}

/// `"Title": null` decodes as an empty title rather than failing the record.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Flashcard {
    Sided(SidedCard),
    /// Arbitrary section-name → text record.
    Sections(Map<String, Value>),
}

impl Flashcard {
    pub fn sided(title: &str, front: &str, back: &str) -> Self {
        Flashcard::Sided(SidedCard {
            title: title.to_string(),
            front: front.to_string(),
            back: back.to_string(),
        })
    }

    /// Whether toggling this card changes what is shown.
    pub fn is_flippable(&self) -> bool {
        matches!(self, Flashcard::Sided(_))
    }

    /// Labelled blocks for a section record. Strings are shown as-is, any
    /// other JSON value as its compact JSON text.
    pub fn sections(&self) -> Vec<(&str, String)> {
        match self {
            Flashcard::Sided(_) => Vec::new(),
            Flashcard::Sections(map) => map
                .iter()
                .map(|(label, value)| {
                    let text = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (label.as_str(), text)
                })
                .collect(),
        }
    }
}

pub type Deck = Vec<Flashcard>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_service_key_names() {
        let json = r#"{"Title":"Cells","Front side":"What is a cell?","Back side":"The unit of life"}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        assert_eq!(card, Flashcard::sided("Cells", "What is a cell?", "The unit of life"));
    }

    #[test]
    fn test_decodes_lowercase_aliases() {
        let json = r#"{"title":"A","front":"f1","back":"b1"}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        assert_eq!(card, Flashcard::sided("A", "f1", "b1"));
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let json = r#"{"Front side":"f","Back side":"b"}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        match card {
            Flashcard::Sided(c) => assert!(c.title.is_empty()),
            other => panic!("expected sided card, got {:?}", other),
        }
    }

    #[test]
    fn test_null_title_stays_sided() {
        let json = r#"{"Title":null,"Front side":"f","Back side":"b"}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        assert_eq!(card, Flashcard::sided("", "f", "b"));
        assert!(card.is_flippable());
    }

    #[test]
    fn test_other_records_fall_back_to_sections() {
        let json = r#"{"Definition":"Osmosis","Pages":3}"#;
        let card: Flashcard = serde_json::from_str(json).unwrap();
        assert!(!card.is_flippable());

        let sections = card.sections();
        assert_eq!(sections.len(), 2);
        assert!(sections.contains(&("Definition", "Osmosis".to_string())));
        assert!(sections.contains(&("Pages", "3".to_string())));
    }

    #[test]
    fn test_sided_card_has_no_sections() {
        let card = Flashcard::sided("A", "f", "b");
        assert!(card.is_flippable());
        assert!(card.sections().is_empty());
    }
}
