use contracts::domain::common::{PageId, PageRole};
use leptos::prelude::*;

pub trait PageEditor: Send + Sync {
    /// Open the editor to create a page of `role` below `parent_page_id`
    fn edit_new_forum_page(&self, parent_page_id: PageId, role: PageRole);
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPageDraft {
    pub parent_page_id: PageId,
    pub role: PageRole,
    pub title: String,
    pub body: String,
}

impl NewPageDraft {
    pub fn new(parent_page_id: PageId, role: PageRole) -> Self {
        Self {
            parent_page_id,
            role,
            title: String::new(),
            body: String::new(),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.role {
            PageRole::ForumCategory => "Create category",
            PageRole::ForumTopic => "Create topic",
            PageRole::Forum => "Create forum",
        }
    }
}

#[derive(Clone, Copy)]
pub struct EditorService {
    pub draft: RwSignal<Option<NewPageDraft>>,
}

impl EditorService {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.with(|d| d.is_some())
    }

    pub fn close(&self) {
        self.draft.set(None);
    }
}

impl Default for EditorService {
    fn default() -> Self {
        Self::new()
    }
}

impl PageEditor for EditorService {
    fn edit_new_forum_page(&self, parent_page_id: PageId, role: PageRole) {
        let replaced = self.draft.with_untracked(|d| d.is_some());
        if replaced {
            log::info!("Discarding open draft for a new {}", role);
        }
        log::debug!("Editing new {} below page {}", role, parent_page_id);
        self.draft.set(Some(NewPageDraft::new(parent_page_id, role)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_new_page_opens_draft() {
        let editor = EditorService::new();
        assert!(!editor.is_open());

        editor.edit_new_forum_page(PageId::from("42"), PageRole::ForumTopic);
        let draft = editor.draft.get_untracked().unwrap();
        assert_eq!(draft.parent_page_id, PageId::from("42"));
        assert_eq!(draft.role, PageRole::ForumTopic);
        assert_eq!(draft.heading(), "Create topic");
    }

    #[test]
    fn test_new_request_replaces_open_draft() {
        let editor = EditorService::new();
        editor.edit_new_forum_page(PageId::from("42"), PageRole::ForumTopic);
        editor.draft.update(|d| {
            if let Some(d) = d {
                d.title = "half written".to_string();
            }
        });

        editor.edit_new_forum_page(PageId::from("7"), PageRole::ForumCategory);
        let draft = editor.draft.get_untracked().unwrap();
        assert_eq!(draft, NewPageDraft::new(PageId::from("7"), PageRole::ForumCategory));

        editor.close();
        assert!(editor.draft.get_untracked().is_none());
    }
}
