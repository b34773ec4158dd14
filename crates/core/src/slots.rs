use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A value held in a conversation slot.
///
/// Slots coming from the dialogue host are loosely typed JSON; the variants
/// cover what the host's slot types can carry. Lists and maps are passed
/// through untouched. `Null` only shows up nested inside them, since a null
/// slot is read as unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<SlotValue>),
    Map(BTreeMap<String, SlotValue>),
}

impl SlotValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn integer(value: i64) -> Self {
        Self::Number(Number::from(value))
    }

    /// Whether the value counts as supplied.
    ///
    /// Empty strings, zero, `false` and empty collections are treated the same
    /// as an unset slot.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(number) => number.as_f64().map(|value| value != 0.0).unwrap_or(true),
            Self::Text(text) => !text.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<bool> for SlotValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Read access to the slots of the active conversation.
pub trait SlotReader {
    fn slot(&self, name: &str) -> Option<&SlotValue>;

    /// The slot value if it is bound, `None` when unset or empty.
    fn filled(&self, name: &str) -> Option<SlotValue> {
        self.slot(name).filter(|value| value.is_filled()).cloned()
    }
}

/// Snapshot of slot values as the host handed them over.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSnapshot {
    values: BTreeMap<String, SlotValue>,
}

impl SlotSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SlotValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<SlotValue> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds a snapshot from the host's slot map, dropping null entries.
    pub fn from_nullable<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<SlotValue>)>,
        K: Into<String>,
    {
        let values = entries
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name.into(), value)))
            .collect();
        Self { values }
    }
}

impl SlotReader for SlotSnapshot {
    fn slot(&self, name: &str) -> Option<&SlotValue> {
        self.values.get(name)
    }
}

impl SlotReader for BTreeMap<String, SlotValue> {
    fn slot(&self, name: &str) -> Option<&SlotValue> {
        self.get(name)
    }
}

impl SlotReader for HashMap<String, SlotValue> {
    fn slot(&self, name: &str) -> Option<&SlotValue> {
        self.get(name)
    }
}
