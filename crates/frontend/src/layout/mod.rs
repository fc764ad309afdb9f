pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Forum page shell: header on top, forum content below
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="forum-layout">
            <header::Header />
            <main class="forum-main">{children()}</main>
        </div>
    }
}
