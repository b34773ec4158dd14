use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_find_hotels_form";
pub const FORM_NAME: &str = "find_hotels_form";

pub const RESIDENT_CITY: &str = "resident_city";
pub const CHECK_IN_DATE: &str = "check_in_date";
pub const CHECK_OUT_DATE: &str = "check_out_date";
pub const AMENITY: &str = "amenity";

pub const RESIDENT_CITY_PROMPT: &str = "Please provide a valid city of residence.";
pub const CHECK_IN_DATE_PROMPT: &str = "Please provide a valid check-in date.";
pub const CHECK_OUT_DATE_PROMPT: &str = "Please provide a valid check-out date.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelSearchSlots {
    pub resident_city: Option<SlotValue>,
    pub check_in_date: Option<SlotValue>,
    pub check_out_date: Option<SlotValue>,
    pub amenity: Option<SlotValue>,
}

impl HotelSearchSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self {
            resident_city: slots.filled(RESIDENT_CITY),
            check_in_date: slots.filled(CHECK_IN_DATE),
            check_out_date: slots.filled(CHECK_OUT_DATE),
            amenity: slots.filled(AMENITY),
        }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.require(RESIDENT_CITY, self.resident_city.as_ref(), RESIDENT_CITY_PROMPT);
        outcome.require(CHECK_IN_DATE, self.check_in_date.as_ref(), CHECK_IN_DATE_PROMPT);
        outcome.require(CHECK_OUT_DATE, self.check_out_date.as_ref(), CHECK_OUT_DATE_PROMPT);
        outcome.pass_through(AMENITY, self.amenity.as_ref());
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HotelSearchValidator;

impl FormValidator for HotelSearchValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[RESIDENT_CITY, CHECK_IN_DATE, CHECK_OUT_DATE]
    }

    fn optional_slots(&self) -> &'static [&'static str] {
        &[AMENITY]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        HotelSearchSlots::from_reader(slots).validate()
    }
}
