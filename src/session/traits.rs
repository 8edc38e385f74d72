pub mod session_provider;
