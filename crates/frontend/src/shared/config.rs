//! Forum page configuration
//!
//! The server renders the forum shell with its settings as `data-*`
//! attributes on `<body>`:
//!
//! ```html
//! <body data-forum-page-id="1" data-create-account-path="/-/create-account">
//! ```

use contracts::domain::common::PageId;
use thiserror::Error;

pub const DEFAULT_CREATE_ACCOUNT_PATH: &str = "/-/create-account";
pub const DEFAULT_CATEGORY_QUERY_KEY: &str = "category";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("document has no <body> element")]
    NoBody,
    #[error("missing required attribute data-forum-page-id on <body>")]
    MissingPageId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForumConfig {
    /// Page id of the forum root, used when no category is selected
    pub forum_page_id: PageId,
    pub create_account_path: String,
    /// Query parameter that remembers the selected category slug
    pub category_query_key: String,
}

impl ForumConfig {
    pub fn from_document() -> Result<Self, ConfigError> {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or(ConfigError::NoBody)?;
        Self::from_attributes(|name| body.get_attribute(name))
    }

    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            get(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let forum_page_id = non_empty("data-forum-page-id")
            .map(PageId::from)
            .ok_or(ConfigError::MissingPageId)?;

        Ok(Self {
            forum_page_id,
            create_account_path: non_empty("data-create-account-path")
                .unwrap_or_else(|| DEFAULT_CREATE_ACCOUNT_PATH.to_string()),
            category_query_key: non_empty("data-category-query-key")
                .unwrap_or_else(|| DEFAULT_CATEGORY_QUERY_KEY.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_for_optional_attributes() {
        let map = attrs(&[("data-forum-page-id", "1")]);
        let config = ForumConfig::from_attributes(|name| map.get(name).cloned()).unwrap();
        assert_eq!(config.forum_page_id, PageId::from("1"));
        assert_eq!(config.create_account_path, DEFAULT_CREATE_ACCOUNT_PATH);
        assert_eq!(config.category_query_key, DEFAULT_CATEGORY_QUERY_KEY);
    }

    #[test]
    fn test_overrides() {
        let map = attrs(&[
            ("data-forum-page-id", " 9 "),
            ("data-create-account-path", "/signup"),
            ("data-category-query-key", "c"),
        ]);
        let config = ForumConfig::from_attributes(|name| map.get(name).cloned()).unwrap();
        assert_eq!(config.forum_page_id, PageId::from("9"));
        assert_eq!(config.create_account_path, "/signup");
        assert_eq!(config.category_query_key, "c");
    }

    #[test]
    fn test_page_id_is_required() {
        let map = attrs(&[("data-forum-page-id", "  ")]);
        assert_eq!(
            ForumConfig::from_attributes(|name| map.get(name).cloned()),
            Err(ConfigError::MissingPageId)
        );
    }
}
