use std::path::{Path, PathBuf};
use log::debug;
use crate::session::structs::file_session::FileSession;
use crate::session::structs::user_info::UserInfo;
use crate::session::traits::session_provider::SessionProvider;

impl FileSession {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: PathBuf::from(path.as_ref()),
        }
    }

    pub fn save(&self, user: &UserInfo) -> std::io::Result<()> {
        let data = serde_json::to_vec_pretty(user)?;
        std::fs::write(&self.path, data)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl SessionProvider for FileSession {
    fn current_user(&self) -> Option<UserInfo> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("[SESSION] No session at {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_slice::<UserInfo>(&data) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!("[SESSION] Corrupt session at {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
