use crate::session::structs::user_info::UserInfo;

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserInfo>;

    fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|user| user.id)
    }

    fn token(&self) -> Option<String> {
        self.current_user().and_then(|user| user.token)
    }
}
