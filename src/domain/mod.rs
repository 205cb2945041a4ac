mod booking;
mod validation;

pub use booking::{BookingRecord, BookingRequest};
pub use validation::{validate, ValidationOutcome};
