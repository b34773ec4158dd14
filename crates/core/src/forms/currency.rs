use crate::slots::{SlotReader, SlotValue};
use crate::validation::{FormValidator, ValidationOutcome};

pub const ACTION_NAME: &str = "validate_ask_currency_exchange_form";
pub const FORM_NAME: &str = "ask_currency_exchange_form";

pub const AMOUNT: &str = "amount";
pub const SOURCE_CURRENCY: &str = "source_currency";
pub const TARGET_CURRENCY: &str = "target_currency";

pub const SOURCE_CURRENCY_PROMPT: &str = "Please provide the source currency.";
pub const TARGET_CURRENCY_PROMPT: &str = "Please provide the target currency.";

/// Amount used when the user names currencies without a figure.
pub const DEFAULT_AMOUNT: i64 = 1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrencyExchangeSlots {
    pub amount: Option<SlotValue>,
    pub source_currency: Option<SlotValue>,
    pub target_currency: Option<SlotValue>,
}

impl CurrencyExchangeSlots {
    pub fn from_reader(slots: &dyn SlotReader) -> Self {
        Self {
            amount: slots.filled(AMOUNT),
            source_currency: slots.filled(SOURCE_CURRENCY),
            target_currency: slots.filled(TARGET_CURRENCY),
        }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        // A zero or empty amount counts as unset and falls back to the default.
        let amount = self.amount.clone().unwrap_or_else(|| SlotValue::integer(DEFAULT_AMOUNT));
        outcome.set(AMOUNT, amount);
        outcome.require(SOURCE_CURRENCY, self.source_currency.as_ref(), SOURCE_CURRENCY_PROMPT);
        outcome.require(TARGET_CURRENCY, self.target_currency.as_ref(), TARGET_CURRENCY_PROMPT);

        outcome
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CurrencyExchangeValidator;

impl FormValidator for CurrencyExchangeValidator {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    fn form(&self) -> &'static str {
        FORM_NAME
    }

    fn required_slots(&self) -> &'static [&'static str] {
        &[SOURCE_CURRENCY, TARGET_CURRENCY]
    }

    fn optional_slots(&self) -> &'static [&'static str] {
        &[AMOUNT]
    }

    fn validate(&self, slots: &dyn SlotReader) -> ValidationOutcome {
        CurrencyExchangeSlots::from_reader(slots).validate()
    }
}
