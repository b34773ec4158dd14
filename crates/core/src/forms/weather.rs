use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_ask_weather_form";
pub const FORM_NAME: &str = "ask_weather_form";

pub const TRAVEL_CITY: &str = "travel_city";
pub const FORECAST: &str = "forecast";
pub const TRAVEL_CITY_PROMPT: &str = "Please provide the city you want to travel.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherSlots {
    pub travel_city: Option<SlotValue>,
    pub forecast: Option<SlotValue>,
}

impl WeatherSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self { travel_city: slots.filled(TRAVEL_CITY), forecast: slots.filled(FORECAST) }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        outcome.require(TRAVEL_CITY, self.travel_city.as_ref(), TRAVEL_CITY_PROMPT);
        outcome.pass_through(FORECAST, self.forecast.as_ref());
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeatherValidator;

impl FormValidator for WeatherValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[TRAVEL_CITY]
    }

    fn optional_slots(&self) -> &'static [&'static str] {
        &[FORECAST]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        WeatherSlots::from_reader(slots).validate()
    }
}
