pub mod audit;
pub mod config;
pub mod errors;
pub mod forms;
pub mod protocol;
pub mod registry;
pub mod slots;
pub mod validation;

pub use audit::{AuditContext, AuditEvent, AuditSink, InMemoryAuditSink};
pub use errors::{ApplicationError, InterfaceError};
pub use protocol::{ActionCall, ActionResponse, BotResponse, TrackerEvent};
pub use registry::ValidatorRegistry;
pub use slots::{SlotReader, SlotSnapshot, SlotValue};
pub use validation::{FormValidator, Prompt, SlotChange, SlotUpdate, ValidationOutcome};
