use leptos::prelude::*;
use thaw::*;

use super::service::EditorService;

/// Dialog for the draft opened through [`EditorService`]
#[component]
pub fn NewPageEditor() -> impl IntoView {
    let editor = use_context::<EditorService>().expect("EditorService not provided in context");
    let open = RwSignal::new(false);

    Effect::new(move |_| open.set(editor.is_open()));
    Effect::new(move |_| {
        if !open.get() && editor.draft.with_untracked(|d| d.is_some()) {
            editor.close();
        }
    });

    let heading = move || {
        editor
            .draft
            .with(|d| d.as_ref().map(|d| d.heading()).unwrap_or_default())
    };
    let parent = move || {
        editor
            .draft
            .with(|d| d.as_ref().map(|d| d.parent_page_id.to_string()).unwrap_or_default())
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{heading}</DialogTitle>
                    <DialogContent>
                        <div class="editor__parent">"In page " {parent}</div>
                        <div class="form-group">
                            <label for="editor-title">"Title"</label>
                            <input
                                type="text"
                                id="editor-title"
                                prop:value=move || {
                                    editor.draft.with(|d| d.as_ref().map(|d| d.title.clone()).unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.draft.update(|d| {
                                        if let Some(d) = d {
                                            d.title = value;
                                        }
                                    });
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="editor-body">"Text"</label>
                            <textarea
                                id="editor-body"
                                rows="8"
                                prop:value=move || {
                                    editor.draft.with(|d| d.as_ref().map(|d| d.body.clone()).unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.draft.update(|d| {
                                        if let Some(d) = d {
                                            d.body = value;
                                        }
                                    });
                                }
                            ></textarea>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| editor.close()>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
