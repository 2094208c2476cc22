pub mod app_state;
pub mod configuration;
pub mod envelope;
pub mod errors;
