use serde::Serialize;

use crate::slots::{SlotReader, SlotSnapshot, SlotValue};

/// What the host should do with one slot after validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SlotUpdate {
    Set(SlotValue),
    Clear,
}

impl SlotUpdate {
    pub fn value(&self) -> Option<&SlotValue> {
        match self {
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotChange {
    pub slot: &'static str,
    pub update: SlotUpdate,
}

/// User-facing message asking for one or more slots again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub text: String,
    pub slots: Vec<&'static str>,
}

/// Slot changes and prompts produced by one validator run, both in emission order.
///
/// Slots that do not appear in `changes` are left as they are by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub changes: Vec<SlotChange>,
    pub prompts: Vec<Prompt>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: &'static str, value: SlotValue) {
        self.record(slot, SlotUpdate::Set(value));
    }

    pub fn clear(&mut self, slot: &'static str) {
        self.record(slot, SlotUpdate::Clear);
    }

    /// Keeps `value` when present, clears the slot otherwise.
    pub fn pass_through(&mut self, slot: &'static str, value: Option<&SlotValue>) {
        match value {
            Some(value) => self.set(slot, value.clone()),
            None => self.clear(slot),
        }
    }

    /// Like [`pass_through`](Self::pass_through) but asks the user again when the slot is unset.
    pub fn require(&mut self, slot: &'static str, value: Option<&SlotValue>, prompt: &str) {
        if value.is_none() {
            self.prompt(prompt, &[slot]);
        }
        self.pass_through(slot, value);
    }

    pub fn prompt(&mut self, text: &str, slots: &[&'static str]) {
        self.prompts.push(Prompt { text: text.to_owned(), slots: slots.to_vec() });
    }

    pub fn update_for(&self, slot: &str) -> Option<&SlotUpdate> {
        self.changes.iter().rev().find(|change| change.slot == slot).map(|change| &change.update)
    }

    pub fn cleared(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.changes
            .iter()
            .filter(|change| change.update == SlotUpdate::Clear)
            .map(|change| change.slot)
    }

    pub fn prompt_texts(&self) -> Vec<&str> {
        self.prompts.iter().map(|prompt| prompt.text.as_str()).collect()
    }

    /// Applies the changes the way the host does: set values overwrite, cleared slots become unset.
    pub fn apply_to(&self, snapshot: &mut SlotSnapshot) {
        for change in &self.changes {
            match &change.update {
                SlotUpdate::Set(value) => snapshot.insert(change.slot, value.clone()),
                SlotUpdate::Clear => {
                    snapshot.remove(change.slot);
                }
            }
        }
    }

    fn record(&mut self, slot: &'static str, update: SlotUpdate) {
        match self.changes.iter_mut().find(|change| change.slot == slot) {
            Some(existing) => existing.update = update,
            None => self.changes.push(SlotChange { slot, update }),
        }
    }
}

/// Validation callback bound to one dialogue form.
pub trait FormValidator: Send + Sync {
    /// Stable action name the host uses to call this validator.
    fn name(&self) -> &'static str;
    fn form(&self) -> &'static str;
    fn required_slots(&self) -> &'static [&'static str];
    fn optional_slots(&self) -> &'static [&'static str] {
        &[]
    }
    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome;
}
