use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSession {
    pub path: PathBuf,
}
