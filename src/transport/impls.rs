pub mod transport_client;
pub mod transport_state;
