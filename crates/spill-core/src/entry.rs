use serde::{Deserialize, Serialize};

use crate::error::SpillError;

/// A free-writing session the user wants reflected back to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct JournalEntry {
    text: String,
}

#[derive(Deserialize)]
struct RawEntry {
    text: String,
}

impl TryFrom<RawEntry> for JournalEntry {
    type Error = SpillError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        JournalEntry::new(raw.text)
    }
}

impl JournalEntry {
    /// Wrap `text`, dropping trailing whitespace. Blank text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, SpillError> {
        let mut text = text.into();
        if text.trim().is_empty() {
            return Err(SpillError::EmptyEntry);
        }
        let trimmed_len = text.trim_end().len();
        text.truncate(trimmed_len);
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank() {
        assert!(matches!(JournalEntry::new(""), Err(SpillError::EmptyEntry)));
        assert!(matches!(
            JournalEntry::new("  \n\t  "),
            Err(SpillError::EmptyEntry)
        ));
    }

    #[test]
    fn trims_trailing_whitespace_only() {
        let entry = JournalEntry::new("  today was long\n\n").unwrap();
        assert_eq!(entry.as_str(), "  today was long");
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        let entry = JournalEntry::new("I keep\nstarting   over").unwrap();
        assert_eq!(entry.word_count(), 4);
    }

    #[test]
    fn serializes_as_text_field() {
        let entry = JournalEntry::new("hello").unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn deserialize_rejects_blank_text() {
        let err = serde_json::from_str::<JournalEntry>(r#"{"text":"   "}"#).unwrap_err();
        assert!(err.to_string().contains("empty"), "got: {err}");
        assert!(serde_json::from_str::<JournalEntry>(r#"{"text":"   \n"}"#).is_err());
    }

    #[test]
    fn deserialize_trims_trailing_whitespace() {
        let entry: JournalEntry = serde_json::from_str(r#"{"text":"long week\n\n"}"#).unwrap();
        assert_eq!(entry.as_str(), "long week");
    }
}
