use contracts::domain::common::PageId;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use crate::system::auth::AuthState;

/// Process-wide forum state: who is logged in and which page is shown
pub trait AppStore: Send + Sync {
    fn user(&self) -> Signal<Option<UserInfo>>;
    /// Page currently shown; on the forum index this is the forum root
    fn page_id(&self) -> PageId;
}

#[derive(Clone, Copy)]
pub struct ForumGlobalContext {
    pub page_id: RwSignal<PageId>,
    pub user: Signal<Option<UserInfo>>,
}

impl ForumGlobalContext {
    pub fn new(page_id: PageId, auth: impl Into<Signal<AuthState>>) -> Self {
        let auth = auth.into();
        Self {
            page_id: RwSignal::new(page_id),
            user: Signal::derive(move || auth.with(|state| state.user_info.clone())),
        }
    }
}

impl AppStore for ForumGlobalContext {
    fn user(&self) -> Signal<Option<UserInfo>> {
        self.user
    }

    fn page_id(&self) -> PageId {
        self.page_id.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_follows_auth_state() {
        let auth = RwSignal::new(AuthState::default());
        let store = ForumGlobalContext::new(PageId::from("1"), auth);
        assert_eq!(store.user().get_untracked(), None);

        let user = UserInfo {
            id: "5".to_string(),
            username: "bob".to_string(),
            full_name: Some("Bob B".to_string()),
            is_admin: true,
        };
        auth.set(AuthState {
            access_token: Some("t".to_string()),
            user_info: Some(user.clone()),
        });
        assert_eq!(store.user().get_untracked(), Some(user));
        assert_eq!(store.page_id(), PageId::from("1"));
    }
}
