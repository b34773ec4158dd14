use serde::Serialize;
use tripdesk_core::config::{AppConfig, LoadOptions};
use tripdesk_core::registry::ValidatorRegistry;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ActionSummary {
    name: &'static str,
    form: &'static str,
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("actions", "config_validation", error.to_string(), 2)
        }
    };

    let registry = ValidatorRegistry::with_defaults()
        .without(config.actions.disabled.iter().map(String::as_str));
    let summaries: Vec<ActionSummary> = registry
        .validators()
        .map(|validator| ActionSummary {
            name: validator.name(),
            form: validator.form(),
            required: validator.required_slots(),
            optional: validator.optional_slots(),
        })
        .collect();

    match serde_json::to_string_pretty(&summaries) {
        Ok(output) => CommandResult::raw(output),
        Err(error) => CommandResult::failure("actions", "serialization", error.to_string(), 1),
    }
}
