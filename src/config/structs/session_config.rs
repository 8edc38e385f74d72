use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// JSON file holding the logged-in user's `{ id, username, token }`.
    pub path: String,
}
