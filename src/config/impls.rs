pub mod broker_config;
pub mod configuration;
pub mod configuration_error;
