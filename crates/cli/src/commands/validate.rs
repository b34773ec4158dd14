use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tripdesk_core::config::{AppConfig, LoadOptions};
use tripdesk_core::errors::ApplicationError;
use tripdesk_core::protocol::ActionResponse;
use tripdesk_core::registry::ValidatorRegistry;
use tripdesk_core::slots::{SlotSnapshot, SlotValue};

use super::CommandResult;

const COMMAND: &str = "validate";

/// Where the slot map for an offline validation run comes from.
#[derive(Debug, Clone)]
pub enum SlotInput {
    Inline(String),
    File(PathBuf),
    Empty,
}

pub fn run(action: &str, input: SlotInput) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(COMMAND, "config_validation", error.to_string(), 2)
        }
    };

    let snapshot = match read_slots(input) {
        Ok(snapshot) => snapshot,
        Err(message) => return CommandResult::failure(COMMAND, "invalid_input", message, 2),
    };

    let registry = ValidatorRegistry::with_defaults()
        .without(config.actions.disabled.iter().map(String::as_str));
    let outcome = match registry.run(action, &snapshot) {
        Ok(outcome) => outcome,
        Err(error @ ApplicationError::UnknownAction(_)) => {
            return CommandResult::failure(COMMAND, "unknown_action", error.to_string(), 2)
        }
        Err(error) => return CommandResult::failure(COMMAND, "validation", error.to_string(), 1),
    };

    match serde_json::to_string_pretty(&ActionResponse::from(&outcome)) {
        Ok(output) => CommandResult::raw(output),
        Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 1),
    }
}

fn read_slots(input: SlotInput) -> Result<SlotSnapshot, String> {
    let raw = match input {
        SlotInput::Inline(raw) => raw,
        SlotInput::File(path) => fs::read_to_string(&path)
            .map_err(|error| format!("could not read slot file `{}`: {error}", path.display()))?,
        SlotInput::Empty => return Ok(SlotSnapshot::new()),
    };

    let slots: BTreeMap<String, Option<SlotValue>> = serde_json::from_str(&raw)
        .map_err(|error| format!("slots must be a JSON object of slot values: {error}"))?;
    Ok(SlotSnapshot::from_nullable(slots))
}
