use parking_lot::RwLock;
use crate::session::structs::static_session::StaticSession;
use crate::session::structs::user_info::UserInfo;
use crate::session::traits::session_provider::SessionProvider;

impl StaticSession {
    pub fn new(user: Option<UserInfo>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    pub fn set_user(&self, user: UserInfo) {
        *self.user.write() = Some(user);
    }

    pub fn clear(&self) {
        *self.user.write() = None;
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserInfo> {
        self.user.read().clone()
    }
}
