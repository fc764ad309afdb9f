use contracts::domain::a001_forum_category::aggregate::Category;
use contracts::domain::common::{PageId, PageRole};
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use std::future::Future;
use std::sync::Arc;

use crate::domain::a001_forum_category::service::{CategorySelection, CategoryService};
use crate::domain::a002_forum_page::editor::{EditorService, PageEditor};
use crate::layout::global_context::{AppStore, ForumGlobalContext};
use crate::shared::location::{escape_hash, BrowserLocation, Location};
use crate::system::auth::{LoginAction, LoginGate, LoginGateService};

/// ViewModel for the forum category selector.
///
/// Holds no state of its own: the selection lives in the category service,
/// the user and page id in the global store.
#[derive(Clone)]
pub struct CategorySelectorViewModel {
    pub selected_categories: Signal<Vec<Category>>,
    pub all_main_categories: Signal<Vec<Category>>,
    pub current_user: Signal<Option<UserInfo>>,
    categories: Arc<dyn CategorySelection>,
    store: Arc<dyn AppStore>,
    login: Arc<dyn LoginGate>,
    editor: Arc<dyn PageEditor>,
    location: Arc<dyn Location>,
}

impl CategorySelectorViewModel {
    pub fn new(
        categories: Arc<dyn CategorySelection>,
        store: Arc<dyn AppStore>,
        login: Arc<dyn LoginGate>,
        editor: Arc<dyn PageEditor>,
        location: Arc<dyn Location>,
    ) -> Self {
        Self {
            selected_categories: categories.selected_categories(),
            all_main_categories: categories.all_main_categories(),
            current_user: store.user(),
            categories,
            store,
            login,
            editor,
            location,
        }
    }

    /// Build from the services provided by the app shell
    pub fn from_context() -> Self {
        let categories =
            use_context::<CategoryService>().expect("CategoryService not provided in context");
        let store = use_context::<ForumGlobalContext>()
            .expect("ForumGlobalContext not provided in context");
        let login =
            use_context::<LoginGateService>().expect("LoginGateService not provided in context");
        let editor = use_context::<EditorService>().expect("EditorService not provided in context");

        Self::new(
            Arc::new(categories),
            Arc::new(store),
            Arc::new(login),
            Arc::new(editor),
            Arc::new(BrowserLocation),
        )
    }

    pub fn change_category(&self, slug: &str) {
        self.categories.change_category(slug);
    }

    /// Page id of the most specific selected category
    pub fn selected_category_id(&self) -> Option<PageId> {
        self.selected_categories
            .with(|path| path.last().map(|c| c.page_id.clone()))
    }

    /// Selected category, or the forum root when nothing is selected
    pub fn selected_category_or_forum_id(&self) -> PageId {
        self.selected_category_id()
            .unwrap_or_else(|| self.store.page_id())
    }

    pub fn can_manage_categories(&self) -> bool {
        self.current_user
            .with(|u| u.as_ref().map(|u| u.is_admin).unwrap_or(false))
    }

    pub fn edit_category(&self) {
        let url = format!("/-{}", self.selected_category_or_forum_id());
        log::debug!("Navigating to {}", url);
        self.location.assign(&url);
    }

    pub fn create_category(&self) {
        wasm_bindgen_futures::spawn_local(self.create_child_page(PageRole::ForumCategory));
    }

    pub fn create_topic(&self) {
        wasm_bindgen_futures::spawn_local(self.create_child_page(PageRole::ForumTopic));
    }

    /// Ask for a login now; open the editor once logged in. The parent page
    /// is read when the login completes, not when the action started.
    fn create_child_page(&self, role: PageRole) -> impl Future<Output = ()> + 'static {
        let return_to_url = escape_hash(&self.location.href());
        let logged_in = self
            .login
            .login_if_needed(LoginAction::CreateTopic, return_to_url);

        let vm = self.clone();
        async move {
            match logged_in.await {
                Ok(()) => {
                    let parent = vm.selected_category_or_forum_id();
                    vm.editor.edit_new_forum_page(parent, role);
                }
                Err(e) => log::info!("Not creating {}: {}", role, e),
            }
        }
    }
}
