//! JSON shapes exchanged with the dialogue host's custom-action webhook.
//!
//! The host posts the conversation tracker for the action it wants to run and
//! expects back a list of tracker events plus the messages to send the user.
//! Only the parts of the tracker the validators need are modelled; the rest
//! of the payload is accepted and ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::slots::{SlotSnapshot, SlotValue};
use crate::validation::ValidationOutcome;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: TrackerState,
    #[serde(default)]
    pub domain: Option<Value>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ActionCall {
    /// Conversation identifier, taken from the request or its tracker.
    pub fn conversation_id(&self) -> Option<&str> {
        self.sender_id.as_deref().or(self.tracker.sender_id.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<String, Option<SlotValue>>,
    #[serde(default)]
    pub active_loop: Option<ActiveLoop>,
    #[serde(default)]
    pub latest_message: Option<Value>,
}

impl TrackerState {
    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot::from_nullable(
            self.slots.iter().map(|(name, value)| (name.clone(), value.clone())),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLoop {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum TrackerEvent {
    #[serde(rename = "slot")]
    SlotSet { name: String, value: Option<SlotValue> },
}

/// A message for the user, in the host's bot-response layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotResponse {
    pub text: String,
    #[serde(default)]
    pub buttons: Vec<Value>,
    #[serde(default)]
    pub elements: Vec<Value>,
    #[serde(default)]
    pub custom: BTreeMap<String, Value>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl BotResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<TrackerEvent>,
    pub responses: Vec<BotResponse>,
}

impl From<&ValidationOutcome> for ActionResponse {
    fn from(outcome: &ValidationOutcome) -> Self {
        let events = outcome
            .changes
            .iter()
            .map(|change| TrackerEvent::SlotSet {
                name: change.slot.to_owned(),
                value: change.update.value().cloned(),
            })
            .collect();
        let responses =
            outcome.prompts.iter().map(|prompt| BotResponse::text(prompt.text.clone())).collect();

        Self { events, responses }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub error: String,
    pub action_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    pub name: String,
}
