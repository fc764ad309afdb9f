//! Category selection: the list of categories and the drill-down path the
//! visitor has chosen. The selected slug is mirrored into the query string so
//! a reload or a shared link keeps the selection.

use contracts::domain::a001_forum_category::aggregate::Category;
use contracts::domain::common::PageId;
use leptos::prelude::*;
use std::sync::Arc;

use super::api;
use super::path::{main_categories, selection_path};
use crate::shared::config::ForumConfig;
use crate::shared::location::{query_param, with_query_param, Location};

pub trait CategorySelection: Send + Sync {
    /// Selected path, most specific category last. Read only.
    fn selected_categories(&self) -> Signal<Vec<Category>>;
    fn all_main_categories(&self) -> Signal<Vec<Category>>;
    fn change_category(&self, slug: &str);
}

#[derive(Clone)]
pub struct CategoryService {
    forum_id: PageId,
    query_key: String,
    categories: RwSignal<Vec<Category>>,
    selected: RwSignal<Vec<Category>>,
    loaded: RwSignal<bool>,
    pending_slug: RwSignal<Option<String>>,
    location: Arc<dyn Location>,
}

impl CategoryService {
    pub fn new(config: &ForumConfig, location: Arc<dyn Location>) -> Self {
        Self {
            forum_id: config.forum_page_id.clone(),
            query_key: config.category_query_key.clone(),
            categories: RwSignal::new(Vec::new()),
            selected: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            pending_slug: RwSignal::new(None),
            location,
        }
    }

    /// Replace the category list and re-resolve the selection against it
    pub fn set_categories(&self, categories: Vec<Category>) {
        log::debug!("Loaded {} categories", categories.len());
        self.categories.set(categories);
        self.loaded.set(true);

        if let Some(slug) = self.pending_slug.get_untracked() {
            self.pending_slug.set(None);
            self.change_category(&slug);
            return;
        }

        let current = self
            .selected
            .with_untracked(|path| path.last().map(|c| c.slug.clone()));
        if let Some(slug) = current {
            let path = self.categories.with_untracked(|c| selection_path(c, &slug));
            self.selected.set(path.unwrap_or_default());
        }
    }

    /// Fetch the categories from the server in the background
    pub fn load(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories(&this.forum_id).await {
                Ok(response) => {
                    if response.forum_id != this.forum_id {
                        log::warn!(
                            "Asked for categories of forum {} but got forum {}",
                            this.forum_id,
                            response.forum_id
                        );
                    }
                    this.set_categories(response.categories);
                }
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });
    }

    /// Select the category named in the query string, if any
    pub fn restore_from_query(&self) {
        if let Some(slug) = query_param(&self.location.search(), &self.query_key) {
            self.change_category(&slug);
        }
    }

    fn persist(&self, slug: Option<&str>) {
        let search = with_query_param(&self.location.search(), &self.query_key, slug);
        self.location.replace_search(&search);
    }
}

impl CategorySelection for CategoryService {
    fn selected_categories(&self) -> Signal<Vec<Category>> {
        self.selected.read_only().into()
    }

    fn all_main_categories(&self) -> Signal<Vec<Category>> {
        let categories = self.categories;
        let forum_id = self.forum_id.clone();
        Signal::derive(move || categories.with(|c| main_categories(c, &forum_id)))
    }

    /// An empty slug goes back to the forum root.
    fn change_category(&self, slug: &str) {
        let slug = slug.trim();
        if slug.is_empty() {
            self.pending_slug.set(None);
            self.selected.set(Vec::new());
            self.persist(None);
            return;
        }

        if !self.loaded.get_untracked() {
            log::debug!("Categories not loaded yet, remembering '{}'", slug);
            self.pending_slug.set(Some(slug.to_string()));
            return;
        }

        match self.categories.with_untracked(|c| selection_path(c, slug)) {
            Some(path) => {
                log::debug!("Selected category '{}' ({} levels)", slug, path.len());
                self.selected.set(path);
                self.persist(Some(slug));
            }
            None => log::warn!("Unknown category slug '{}'", slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_forum_category::path::category;
    use crate::shared::config::DEFAULT_CATEGORY_QUERY_KEY;
    use crate::shared::location::testing::FakeLocation;

    fn config() -> ForumConfig {
        ForumConfig {
            forum_page_id: PageId::from("1"),
            create_account_path: "/-/create-account".to_string(),
            category_query_key: DEFAULT_CATEGORY_QUERY_KEY.to_string(),
        }
    }

    fn forum() -> Vec<Category> {
        vec![
            category("10", Some("1"), "general", 1),
            category("11", Some("1"), "meta", 0),
            category("20", Some("10"), "help", 0),
        ]
    }

    fn selected_slugs(service: &CategoryService) -> Vec<String> {
        service
            .selected_categories()
            .get_untracked()
            .into_iter()
            .map(|c| c.slug)
            .collect()
    }

    fn loaded_service(search: &str) -> (CategoryService, Arc<FakeLocation>) {
        let location = Arc::new(FakeLocation::new("http://forum.test/", search));
        let service = CategoryService::new(&config(), location.clone());
        service.set_categories(forum());
        (service, location)
    }

    #[test]
    fn test_change_category_selects_path_and_persists_slug() {
        let (service, location) = loaded_service("page=2");
        service.change_category("help");

        assert_eq!(selected_slugs(&service), vec!["general", "help"]);
        assert_eq!(location.search(), "category=help&page=2");
    }

    #[test]
    fn test_unknown_slug_keeps_selection() {
        let (service, location) = loaded_service("");
        service.change_category("general");
        service.change_category("does-not-exist");

        assert_eq!(selected_slugs(&service), vec!["general"]);
        assert_eq!(location.search(), "category=general");
    }

    #[test]
    fn test_empty_slug_goes_back_to_forum_root() {
        let (service, location) = loaded_service("category=general&page=2");
        service.change_category("general");
        service.change_category("");

        assert!(selected_slugs(&service).is_empty());
        assert_eq!(location.search(), "page=2");
    }

    #[test]
    fn test_slug_before_load_is_applied_after_load() {
        let location = Arc::new(FakeLocation::new("http://forum.test/", ""));
        let service = CategoryService::new(&config(), location.clone());

        service.change_category("help");
        assert!(selected_slugs(&service).is_empty());

        service.set_categories(forum());
        assert_eq!(selected_slugs(&service), vec!["general", "help"]);
        assert_eq!(location.search(), "category=help");
    }

    #[test]
    fn test_restore_from_query() {
        let location = Arc::new(FakeLocation::new("http://forum.test/", "category=meta"));
        let service = CategoryService::new(&config(), location);
        service.restore_from_query();
        service.set_categories(forum());

        assert_eq!(selected_slugs(&service), vec!["meta"]);
    }

    #[test]
    fn test_reload_drops_vanished_selection() {
        let (service, _) = loaded_service("");
        service.change_category("help");

        service.set_categories(vec![category("10", Some("1"), "general", 0)]);
        assert!(selected_slugs(&service).is_empty());
    }

    #[test]
    fn test_all_main_categories() {
        let (service, _) = loaded_service("");
        let main: Vec<String> = service
            .all_main_categories()
            .get_untracked()
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(main, vec!["meta", "general"]);
    }
}
