pub mod message_service;
pub mod read_receipt_failure;
