pub mod configuration;
pub mod confirmation;
pub mod domain;
pub mod ledger;
pub mod session;
pub mod telemetry;
