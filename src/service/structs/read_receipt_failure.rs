use crate::rest::enums::api_error::ApiError;

#[derive(Debug)]
pub struct ReadReceiptFailure {
    pub message_id: String,
    pub error: ApiError,
}
