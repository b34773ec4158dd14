use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_travel_recommendations_form";
pub const FORM_NAME: &str = "travel_recommendations_form";

pub const TRAVEL_CITY: &str = "travel_city";
pub const TRAVEL_CITY_PROMPT: &str = "Please provide the city you want to travel.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationSlots {
    pub travel_city: Option<SlotValue>,
}

impl RecommendationSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self { travel_city: slots.filled(TRAVEL_CITY) }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.require(TRAVEL_CITY, self.travel_city.as_ref(), TRAVEL_CITY_PROMPT);
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationValidator;

impl FormValidator for RecommendationValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[TRAVEL_CITY]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        RecommendationSlots::from_reader(slots).validate()
    }
}
