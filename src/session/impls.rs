pub mod file_session;
pub mod static_session;
pub mod user_info;
