use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{AppStore, ForumGlobalContext};
use crate::shared::location::{escape_hash, BrowserLocation, Location};
use crate::system::auth::storage::StoredTokens;
use crate::system::auth::{use_auth, AuthState, LoginAction, LoginGate, LoginGateService};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_context::<ForumGlobalContext>().expect("ForumGlobalContext context not found");
    let gate = use_context::<LoginGateService>().expect("LoginGateService context not found");
    let (_, set_auth_state) = use_auth();
    let user = store.user();

    let on_login = move |_| {
        let return_to = escape_hash(&BrowserLocation.href());
        let waiting = gate.login_if_needed(LoginAction::LogIn, return_to);
        spawn_local(async move {
            if let Err(e) = waiting.await {
                log::debug!("Header login: {}", e);
            }
        });
    };

    let on_logout = move |_| {
        StoredTokens::clear();
        set_auth_state.set(AuthState::default());
        log::info!("Logged out");
    };

    view! {
        <header class="header">
            <span class="header__title">"Forum"</span>
            <div class="header__actions">
                {move || match user.get() {
                    Some(u) => view! {
                        <span class="header__user">{u.display_name().to_string()}</span>
                        <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                            "Log out"
                        </Button>
                    }.into_any(),
                    None => view! {
                        <Button appearance=ButtonAppearance::Primary on_click=on_login>
                            "Log in"
                        </Button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
