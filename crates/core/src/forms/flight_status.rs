use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_ask_flight_status_form";
pub const FORM_NAME: &str = "ask_flight_status_form";

pub const FLIGHT_NUMBER: &str = "flight_number";
pub const FLIGHT_NUMBER_PROMPT: &str = "Please provide your flight number.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightStatusSlots {
    pub flight_number: Option<SlotValue>,
}

impl FlightStatusSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self { flight_number: slots.filled(FLIGHT_NUMBER) }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.require(FLIGHT_NUMBER, self.flight_number.as_ref(), FLIGHT_NUMBER_PROMPT);
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FlightStatusValidator;

impl FormValidator for FlightStatusValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[FLIGHT_NUMBER]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        FlightStatusSlots::from_reader(slots).validate()
    }
}
