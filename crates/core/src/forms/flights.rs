use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_check_flights_form";
pub const FORM_NAME: &str = "check_flights_form";

pub const DEPARTURE_CITY: &str = "departure_city";
pub const DESTINATION_CITY: &str = "destination_city";
pub const DEPARTURE_AIRPORT: &str = "departure_airport";
pub const DESTINATION_AIRPORT: &str = "destination_airport";
pub const FLIGHT_TYPE: &str = "flight_type";
pub const DEPARTURE_DATE: &str = "departure_date";
pub const RETURN_DATE: &str = "return_date";

pub const ROUTE_PROMPT: &str =
    "Please provide both departure and destination cities or both airports.";
pub const FLIGHT_TYPE_PROMPT: &str = "Please specify if the flight is 'oneway' or 'return'.";
pub const DEPARTURE_DATE_PROMPT: &str = "Please provide the departure date.";
pub const RETURN_DATE_PROMPT: &str = "Please provide the return date.";

const ROUTE_SLOTS: [&str; 4] =
    [DEPARTURE_CITY, DESTINATION_CITY, DEPARTURE_AIRPORT, DESTINATION_AIRPORT];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripKind {
    OneWay,
    Return,
}

impl TripKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "oneway" => Some(Self::OneWay),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "oneway",
            Self::Return => "return",
        }
    }
}

/// Bound values of the flight search form; `None` means the slot is unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightSearchSlots {
    pub departure_city: Option<SlotValue>,
    pub destination_city: Option<SlotValue>,
    pub departure_airport: Option<SlotValue>,
    pub destination_airport: Option<SlotValue>,
    pub flight_type: Option<SlotValue>,
    pub departure_date: Option<SlotValue>,
    pub return_date: Option<SlotValue>,
}

impl FlightSearchSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self {
            departure_city: slots.filled(DEPARTURE_CITY),
            destination_city: slots.filled(DESTINATION_CITY),
            departure_airport: slots.filled(DEPARTURE_AIRPORT),
            destination_airport: slots.filled(DESTINATION_AIRPORT),
            flight_type: slots.filled(FLIGHT_TYPE),
            departure_date: slots.filled(DEPARTURE_DATE),
            return_date: slots.filled(RETURN_DATE),
        }
    }

    /// Only the exact values `oneway` and `return` are recognised.
    pub fn trip_kind(&self) -> Option<TripKind> {
        self.flight_type.as_ref().and_then(SlotValue::as_str).and_then(TripKind::parse)
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        self.resolve_route(&mut outcome);
        outcome.require(FLIGHT_TYPE, self.flight_type.as_ref(), FLIGHT_TYPE_PROMPT);
        outcome.require(DEPARTURE_DATE, self.departure_date.as_ref(), DEPARTURE_DATE_PROMPT);
        self.resolve_return_date(&mut outcome);

        outcome
    }

    // Airports win over cities when both pairs are complete.
    fn resolve_route(&self, outcome: &mut ValidationOutcome) {
        match (
            &self.departure_airport,
            &self.destination_airport,
            &self.departure_city,
            &self.destination_city,
        ) {
            (Some(departure), Some(destination), _, _) => {
                outcome.set(DEPARTURE_AIRPORT, departure.clone());
                outcome.set(DESTINATION_AIRPORT, destination.clone());
                outcome.clear(DEPARTURE_CITY);
                outcome.clear(DESTINATION_CITY);
            }
            (_, _, Some(departure), Some(destination)) => {
                outcome.set(DEPARTURE_CITY, departure.clone());
                outcome.set(DESTINATION_CITY, destination.clone());
                outcome.clear(DEPARTURE_AIRPORT);
                outcome.clear(DESTINATION_AIRPORT);
            }
            _ => {
                for slot in ROUTE_SLOTS {
                    outcome.clear(slot);
                }
                outcome.prompt(ROUTE_PROMPT, &ROUTE_SLOTS);
            }
        }
    }

    fn resolve_return_date(&self, outcome: &mut ValidationOutcome) {
        match self.trip_kind() {
            Some(TripKind::Return) => {
                outcome.require(RETURN_DATE, self.return_date.as_ref(), RETURN_DATE_PROMPT);
            }
            Some(TripKind::OneWay) => outcome.clear(RETURN_DATE),
            None => outcome.pass_through(RETURN_DATE, self.return_date.as_ref()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FlightSearchValidator;

impl FormValidator for FlightSearchValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[FLIGHT_TYPE, DEPARTURE_DATE]
    }

    fn optional_slots(&self) -> &'static [&'static str] {
        &[DEPARTURE_CITY, DESTINATION_CITY, DEPARTURE_AIRPORT, DESTINATION_AIRPORT, RETURN_DATE]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        FlightSearchSlots::from_reader(slots).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SlotSnapshot;
    use crate::validation::SlotUpdate;

    const CLEARED: Option<SlotUpdate> = Some(SlotUpdate::Clear);

    fn kept(value: &str) -> Option<SlotUpdate> {
        Some(SlotUpdate::Set(SlotValue::text(value)))
    }

    fn update(outcome: &ValidationOutcome, slot: &str) -> Option<SlotUpdate> {
        outcome.update_for(slot).cloned()
    }

    fn run(snapshot: SlotSnapshot) -> ValidationOutcome {
        FlightSearchValidator.validate(&snapshot)
    }

    #[test]
    fn airports_take_precedence_over_cities() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_CITY, "New York")
            .with(DESTINATION_CITY, "Los Angeles")
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "oneway")
            .with(DEPARTURE_DATE, "2024-05-01"));

        assert_eq!(update(&outcome, DEPARTURE_AIRPORT), kept("JFK"));
        assert_eq!(update(&outcome, DESTINATION_AIRPORT), kept("LAX"));
        assert_eq!(update(&outcome, DEPARTURE_CITY), CLEARED);
        assert_eq!(update(&outcome, DESTINATION_CITY), CLEARED);
        assert!(!outcome.prompt_texts().contains(&ROUTE_PROMPT));
    }

    #[test]
    fn city_pair_is_kept_when_airports_are_incomplete() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_CITY, "Berlin")
            .with(DESTINATION_CITY, "Madrid")
            .with(DEPARTURE_AIRPORT, "BER")
            .with(FLIGHT_TYPE, "oneway")
            .with(DEPARTURE_DATE, "2024-06-10"));

        assert_eq!(update(&outcome, DEPARTURE_CITY), kept("Berlin"));
        assert_eq!(update(&outcome, DESTINATION_CITY), kept("Madrid"));
        assert_eq!(update(&outcome, DEPARTURE_AIRPORT), CLEARED);
        assert_eq!(update(&outcome, DESTINATION_AIRPORT), CLEARED);
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn incomplete_route_clears_all_four_with_single_prompt() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_CITY, "Berlin")
            .with(DESTINATION_AIRPORT, "MAD")
            .with(FLIGHT_TYPE, "oneway")
            .with(DEPARTURE_DATE, "2024-06-10"));

        for slot in ROUTE_SLOTS {
            assert_eq!(update(&outcome, slot), CLEARED, "{slot} should be cleared");
        }
        assert_eq!(outcome.prompt_texts(), vec![ROUTE_PROMPT]);
        assert_eq!(outcome.prompts[0].slots, ROUTE_SLOTS.to_vec());
    }

    #[test]
    fn oneway_always_clears_return_date() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "oneway")
            .with(DEPARTURE_DATE, "2024-05-01")
            .with(RETURN_DATE, "2024-05-09"));

        assert_eq!(update(&outcome, RETURN_DATE), CLEARED);
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn return_trip_without_return_date_prompts() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "return")
            .with(DEPARTURE_DATE, "2024-05-01"));

        assert_eq!(update(&outcome, RETURN_DATE), CLEARED);
        assert_eq!(outcome.prompt_texts(), vec![RETURN_DATE_PROMPT]);
    }

    #[test]
    fn return_trip_keeps_supplied_return_date() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "return")
            .with(DEPARTURE_DATE, "2024-05-01")
            .with(RETURN_DATE, "2024-05-09"));

        assert_eq!(update(&outcome, RETURN_DATE), kept("2024-05-09"));
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn unrecognised_flight_type_passes_return_date_through() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "multi-city")
            .with(DEPARTURE_DATE, "2024-05-01")
            .with(RETURN_DATE, "2024-05-09"));

        assert_eq!(update(&outcome, FLIGHT_TYPE), kept("multi-city"));
        assert_eq!(update(&outcome, RETURN_DATE), kept("2024-05-09"));
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn unrecognised_flight_type_clears_blank_return_date_without_prompt() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "multi-city")
            .with(DEPARTURE_DATE, "2024-05-01")
            .with(RETURN_DATE, ""));

        assert_eq!(update(&outcome, RETURN_DATE), CLEARED);
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn empty_form_prompts_in_rule_order() {
        let outcome = run(SlotSnapshot::new());

        assert_eq!(
            outcome.prompt_texts(),
            vec![ROUTE_PROMPT, FLIGHT_TYPE_PROMPT, DEPARTURE_DATE_PROMPT]
        );
        assert_eq!(outcome.cleared().count(), 7);
    }

    #[test]
    fn oneway_airport_scenario_produces_expected_changes() {
        let outcome = run(SlotSnapshot::new()
            .with(DEPARTURE_AIRPORT, "JFK")
            .with(DESTINATION_AIRPORT, "LAX")
            .with(FLIGHT_TYPE, "oneway")
            .with(DEPARTURE_DATE, "2024-05-01"));

        let expected = [
            (DEPARTURE_AIRPORT, kept("JFK")),
            (DESTINATION_AIRPORT, kept("LAX")),
            (DEPARTURE_CITY, CLEARED),
            (DESTINATION_CITY, CLEARED),
            (FLIGHT_TYPE, kept("oneway")),
            (DEPARTURE_DATE, kept("2024-05-01")),
            (RETURN_DATE, CLEARED),
        ];
        assert_eq!(outcome.changes.len(), expected.len());
        for (slot, expected_update) in expected {
            assert_eq!(update(&outcome, slot), expected_update, "unexpected update for {slot}");
        }
        assert!(outcome.prompts.is_empty());
    }

    #[test]
    fn trip_kind_parses_exact_values_only() {
        assert_eq!(TripKind::parse("oneway"), Some(TripKind::OneWay));
        assert_eq!(TripKind::parse("return"), Some(TripKind::Return));
        assert_eq!(TripKind::parse("Return"), None);
        assert_eq!(TripKind::Return.as_str(), "return");
    }
}
