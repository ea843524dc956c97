//! The answer record collected by a wizard session.

use std::fmt;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::domain::error::DomainError;

/// A single recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Free-text input, already trimmed.
    Text(String),
    /// The tag of a selected choice.
    Choice(String),
    /// A yes/no answer.
    Flag(bool),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    /// String view of text and choice answers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Choice(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Choice(s) => f.write_str(s),
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
        }
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) | Self::Choice(s) => serializer.serialize_str(s),
            Self::Flag(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Flat mapping from question key to answer, in the order answers arrived.
///
/// Keys are set at most once. An absent key means the question was not
/// applicable, which is distinct from an empty text answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    entries: Vec<(String, AnswerValue)>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Fails if the key already holds a value.
    pub fn insert(&mut self, key: impl Into<String>, value: AnswerValue) -> Result<(), DomainError> {
        let key = key.into();
        if self.contains(&key) {
            return Err(DomainError::AnswerAlreadySet { key });
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Text or choice answer for `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_str)
    }

    /// Text answer for `key`, treating absent and empty alike.
    pub fn non_empty_text(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|s| !s.is_empty())
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AnswerValue::as_flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset the record for a fresh run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for AnswerRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
