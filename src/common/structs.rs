/// Generic error raised while booting the client.
pub mod custom_error;
