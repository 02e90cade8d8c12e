//! Auto-registration of provisional actuals

pub mod ports;
pub mod service;

pub use service::AutoRegistrationService;
