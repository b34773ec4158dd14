use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_ask_restrictions_tips_form";
pub const FORM_NAME: &str = "ask_restrictions_tips_form";

pub const COUNTRY: &str = "country";
pub const COUNTRY_PROMPT: &str = "Please provide the country you want to enquire.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestrictionSlots {
    pub country: Option<SlotValue>,
}

impl RestrictionSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self { country: slots.filled(COUNTRY) }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.require(COUNTRY, self.country.as_ref(), COUNTRY_PROMPT);
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RestrictionValidator;

impl FormValidator for RestrictionValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[COUNTRY]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        RestrictionSlots::from_reader(slots).validate()
    }
}
