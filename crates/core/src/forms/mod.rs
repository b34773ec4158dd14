//! One validator per dialogue form.
//!
//! Each module exposes a typed slot record built from the host's slot values
//! and a unit validator struct implementing [`FormValidator`](crate::validation::FormValidator).
//! Validators share nothing and can be called from any thread.

pub mod currency;
pub mod flight_status;
pub mod flights;
pub mod hotels;
pub mod recommendations;
pub mod restrictions;
pub mod weather;

pub use currency::{CurrencyExchangeSlots, CurrencyExchangeValidator};
pub use flight_status::{FlightStatusSlots, FlightStatusValidator};
pub use flights::{FlightSearchSlots, FlightSearchValidator, TripKind};
pub use hotels::{HotelSearchSlots, HotelSearchValidator};
pub use recommendations::{RecommendationSlots, RecommendationValidator};
pub use restrictions::{RestrictionSlots, RestrictionValidator};
pub use weather::{WeatherSlots, WeatherValidator};

/// Action names of every built-in validator.
pub const ACTION_NAMES: [&str; 7] = [
    flights::ACTION_NAME,
    flight_status::ACTION_NAME,
    hotels::ACTION_NAME,
    recommendations::ACTION_NAME,
    weather::ACTION_NAME,
    restrictions::ACTION_NAME,
    currency::ACTION_NAME,
];
