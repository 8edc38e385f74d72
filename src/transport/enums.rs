/// How a broker session ended.
pub mod session_end;
/// Transport error type.
pub mod transport_error;
