use super::view_model::CategorySelectorViewModel;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategorySelector() -> impl IntoView {
    let vm = CategorySelectorViewModel::from_context();
    let vm_clone = vm.clone();
    let vm_admin = vm.clone();

    // Slug of the main category, to preselect the drop-down
    let selected_main_slug = {
        let vm = vm_clone.clone();
        move || {
            vm.selected_categories
                .with(|path| path.first().map(|c| c.slug.clone()).unwrap_or_default())
        }
    };

    view! {
        <div class="category-selector">
            <nav class="category-selector__path">
                <a
                    href="#"
                    on:click={
                        let vm = vm_clone.clone();
                        move |ev| {
                            ev.prevent_default();
                            vm.change_category("");
                        }
                    }
                >
                    "All categories"
                </a>
                <For
                    each={
                        let vm = vm_clone.clone();
                        move || vm.selected_categories.get()
                    }
                    key=|c| c.page_id.clone()
                    children={
                        let vm = vm_clone.clone();
                        move |c| {
                            let vm = vm.clone();
                            let slug = c.slug.clone();
                            view! {
                                <span class="category-selector__separator">" / "</span>
                                <a
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        vm.change_category(&slug);
                                    }
                                >
                                    {c.name}
                                </a>
                            }
                        }
                    }
                />
            </nav>

            <select
                class="category-selector__main"
                prop:value=selected_main_slug
                on:change={
                    let vm = vm_clone.clone();
                    move |ev| vm.change_category(&event_target_value(&ev))
                }
            >
                <option value="">"All categories"</option>
                <For
                    each={
                        let vm = vm_clone.clone();
                        move || vm.all_main_categories.get()
                    }
                    key=|c| c.page_id.clone()
                    children=|c| view! { <option value=c.slug.clone()>{c.name}</option> }
                />
            </select>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm_clone.clone();
                        move |_| vm.create_topic()
                    }
                >
                    "Create topic"
                </Button>
                <Show when={
                    let vm = vm_clone.clone();
                    move || vm.can_manage_categories()
                }>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={
                            let vm = vm_admin.clone();
                            move |_| vm.create_category()
                        }
                    >
                        "Create category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={
                            let vm = vm_admin.clone();
                            move |_| vm.edit_category()
                        }
                    >
                        "Edit category"
                    </Button>
                </Show>
            </Flex>
        </div>
    }
}
