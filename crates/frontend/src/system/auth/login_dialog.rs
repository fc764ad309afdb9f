use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::context::{complete_login, use_auth};
use super::gate::{LoginAction, LoginGateService};
use super::api;
use crate::shared::config::ForumConfig;

/// Login dialog shown while [`LoginGateService`] has waiting requests
#[component]
pub fn LoginDialog() -> impl IntoView {
    let gate = use_context::<LoginGateService>().expect("LoginGateService not provided in context");
    let config = use_context::<ForumConfig>().expect("ForumConfig not provided in context");
    let (_, set_auth_state) = use_auth();

    let open = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    Effect::new(move |_| open.set(gate.has_pending()));

    // Closing the dialog in any way abandons the waiting actions
    Effect::new(move |_| {
        gate.dialog_visibility_changed(open.get());
    });

    let on_login = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    complete_login(response, set_auth_state);
                    password.set(String::new());
                    is_loading.set(false);
                    gate.resolve_all(Ok(()));
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    error_message.set(Some(format!("Login failed: {}", e)));
                    is_loading.set(false);
                }
            }
        });
    };

    let title = move || match gate.latest_action() {
        Some(LoginAction::CreateTopic) => "Log in to create a topic",
        _ => "Log in",
    };

    let create_account_href = move || {
        let return_to = gate.latest_return_to_url().unwrap_or_default();
        format!(
            "{}?returnToUrl={}",
            config.create_account_path,
            urlencoding::encode(&return_to)
        )
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <div class="form-group">
                            <label for="login-username">"Username"</label>
                            <input
                                type="text"
                                id="login-username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="login-password">"Password"</label>
                            <input
                                type="password"
                                id="login-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <a class="create-account-link" href=create_account_href>
                            "Create account"
                        </a>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=on_login>
                            {move || if is_loading.get() { "Logging in..." } else { "Log in" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| gate.cancel_all()
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
