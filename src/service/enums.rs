pub mod service_error;
