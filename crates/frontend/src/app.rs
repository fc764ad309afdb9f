use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

use crate::domain::a001_forum_category::service::CategoryService;
use crate::domain::a001_forum_category::ui::selector::CategorySelector;
use crate::domain::a002_forum_page::editor::{EditorService, NewPageEditor};
use crate::layout::global_context::ForumGlobalContext;
use crate::layout::Shell;
use crate::shared::config::ForumConfig;
use crate::shared::location::BrowserLocation;
use crate::system::auth::{use_auth, AuthProvider, LoginDialog, LoginGateService};

#[component]
pub fn App() -> impl IntoView {
    let config = match ForumConfig::from_document() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Cannot start forum: {}", e);
            return view! { <div class="error">{format!("Forum configuration error: {}", e)}</div> }
                .into_any();
        }
    };
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <ForumApp />
            </AuthProvider>
        </ConfigProvider>
    }
    .into_any()
}

/// Wires the forum services into context. Needs the auth state, so it
/// lives inside [`AuthProvider`].
#[component]
fn ForumApp() -> impl IntoView {
    let config = use_context::<ForumConfig>().expect("ForumConfig not provided in context");
    let (auth_state, _) = use_auth();

    let categories = CategoryService::new(&config, Arc::new(BrowserLocation));
    categories.restore_from_query();
    categories.load();

    provide_context(ForumGlobalContext::new(config.forum_page_id.clone(), auth_state));
    provide_context(LoginGateService::new(auth_state));
    provide_context(EditorService::new());
    provide_context(categories);

    view! {
        <Shell>
            <CategorySelector />
        </Shell>
        <LoginDialog />
        <NewPageEditor />
    }
}
