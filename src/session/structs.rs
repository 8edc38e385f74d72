/// Session backed by a JSON file on disk.
pub mod file_session;

/// In-memory session.
pub mod static_session;

/// Persisted user-info blob.
pub mod user_info;
