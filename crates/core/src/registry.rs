use std::collections::BTreeMap;
use std::sync::Arc;

use crate::audit::{AuditContext, AuditEvent, AuditSink};
use crate::errors::ApplicationError;
use crate::forms::{
    CurrencyExchangeValidator, FlightSearchValidator, FlightStatusValidator, HotelSearchValidator,
    RecommendationValidator, RestrictionValidator, WeatherValidator,
};
use crate::slots::SlotReader;
use crate::validation::{FormValidator, ValidationOutcome};

/// Routes action names to the validator bound to them.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: BTreeMap<&'static str, Arc<dyn FormValidator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all seven travel form validators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FlightSearchValidator);
        registry.register(FlightStatusValidator);
        registry.register(HotelSearchValidator);
        registry.register(RecommendationValidator);
        registry.register(WeatherValidator);
        registry.register(RestrictionValidator);
        registry.register(CurrencyExchangeValidator);
        registry
    }

    pub fn register<V>(&mut self, validator: V)
    where
        V: FormValidator + 'static,
    {
        self.validators.insert(validator.name(), Arc::new(validator));
    }

    /// Drops the named validators; unknown names are ignored.
    pub fn without<'a, I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.validators.remove(name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn FormValidator>> {
        self.validators.get(name)
    }

    /// Registered action names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.keys().copied().collect()
    }

    pub fn validators(&self) -> impl Iterator<Item = &Arc<dyn FormValidator>> {
        self.validators.values()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn run(
        &self,
        name: &str,
        slots: &dyn SlotReader,
    ) -> Result<ValidationOutcome, ApplicationError> {
        let validator =
            self.get(name).ok_or_else(|| ApplicationError::UnknownAction(name.to_owned()))?;
        Ok(validator.validate(slots))
    }

    pub fn run_with_audit<S>(
        &self,
        name: &str,
        slots: &dyn SlotReader,
        sink: &S,
        audit: &AuditContext,
    ) -> Result<ValidationOutcome, ApplicationError>
    where
        S: AuditSink + ?Sized,
    {
        let result = self.run(name, slots);
        match &result {
            Ok(outcome) => {
                let set = outcome.changes.len() - outcome.cleared().count();
                sink.emit(
                    AuditEvent::validation_completed(audit, name)
                        .with_metadata("set", set.to_string())
                        .with_metadata("cleared", outcome.cleared().collect::<Vec<_>>().join(","))
                        .with_metadata("prompts", outcome.prompts.len().to_string()),
                );
            }
            Err(error) => {
                sink.emit(
                    AuditEvent::validation_rejected(audit, name)
                        .with_metadata("error", error.to_string()),
                );
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::audit::{AuditContext, AuditOutcome, InMemoryAuditSink};
    use crate::errors::ApplicationError;
    use crate::forms::{self, hotels, ACTION_NAMES};
    use crate::slots::SlotSnapshot;
    use crate::validation::SlotUpdate;

    use super::ValidatorRegistry;

    #[test]
    fn defaults_register_every_form_under_its_action_name() {
        let registry = ValidatorRegistry::with_defaults();

        let mut expected = ACTION_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(registry.names(), expected);
        for validator in registry.validators() {
            assert_eq!(validator.name(), format!("validate_{}", validator.form()));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let registry = ValidatorRegistry::with_defaults();

        let error = registry
            .run("validate_book_cruise_form", &SlotSnapshot::new())
            .expect_err("unregistered action must fail");

        assert_eq!(error, ApplicationError::UnknownAction("validate_book_cruise_form".to_owned()));
    }

    #[test]
    fn disabled_actions_are_removed() {
        let registry = ValidatorRegistry::with_defaults()
            .without([forms::weather::ACTION_NAME, "validate_unknown_form"]);

        assert_eq!(registry.len(), 6);
        assert!(registry.get(forms::weather::ACTION_NAME).is_none());
    }

    #[test]
    fn hotel_scenario_clears_four_slots_with_three_prompts() {
        let registry = ValidatorRegistry::with_defaults();

        let outcome = registry.run(hotels::ACTION_NAME, &SlotSnapshot::new()).expect("registered");

        assert_eq!(outcome.changes.len(), 4);
        assert!(outcome.changes.iter().all(|change| change.update == SlotUpdate::Clear));
        assert_eq!(outcome.prompts.len(), 3);
    }

    #[test]
    fn rerunning_on_applied_output_is_stable_for_every_form() {
        let registry = ValidatorRegistry::with_defaults();
        let inputs = [
            SlotSnapshot::new(),
            SlotSnapshot::new()
                .with("departure_city", "Paris")
                .with("destination_city", "Rome")
                .with("departure_airport", "CDG")
                .with("flight_type", "return")
                .with("departure_date", "2024-09-01")
                .with("resident_city", "Lyon")
                .with("check_in_date", "2024-09-02")
                .with("travel_city", "Rome")
                .with("country", "Italy")
                .with("source_currency", "EUR"),
            SlotSnapshot::new()
                .with("departure_airport", "JFK")
                .with("destination_airport", "LAX")
                .with("flight_type", "oneway")
                .with("return_date", "2024-05-09")
                .with("amount", 0_i64)
                .with("forecast", "")
                .with("amenity", "gym")
                .with("target_currency", "CHF"),
        ];

        for name in registry.names() {
            for input in &inputs {
                let first = registry.run(name, input).expect("registered");
                let mut applied = input.clone();
                first.apply_to(&mut applied);
                let second = registry.run(name, &applied).expect("registered");

                assert_eq!(first, second, "{name} should be idempotent for {input:?}");
            }
        }
    }

    #[test]
    fn audited_run_records_prompt_and_clear_counts() {
        let registry = ValidatorRegistry::with_defaults();
        let sink = InMemoryAuditSink::default();
        let context = AuditContext::new(Some("user-7".to_owned()), "req-9", "action-server");

        registry
            .run_with_audit(hotels::ACTION_NAME, &SlotSnapshot::new(), &sink, &context)
            .expect("registered");
        let _ = registry.run_with_audit("validate_nope", &SlotSnapshot::new(), &sink, &context);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "validation.completed");
        assert_eq!(events[0].metadata.get("prompts").map(String::as_str), Some("3"));
        assert_eq!(
            events[0].metadata.get("cleared").map(String::as_str),
            Some("resident_city,check_in_date,check_out_date,amenity")
        );
        assert_eq!(events[1].outcome, AuditOutcome::Rejected);
        assert_eq!(events[1].action, "validate_nope");
        assert_eq!(events[1].context.correlation_id, "req-9");
    }
}
