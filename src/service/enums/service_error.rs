use thiserror::Error;
use crate::rest::enums::api_error::ApiError;
use crate::transport::enums::transport_error::TransportError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No user is logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
