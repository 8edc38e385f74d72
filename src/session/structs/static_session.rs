use parking_lot::RwLock;
use crate::session::structs::user_info::UserInfo;

#[derive(Debug, Default)]
pub struct StaticSession {
    pub user: RwLock<Option<UserInfo>>,
}
