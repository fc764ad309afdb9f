use crate::domain::common::PageId;
use serde::{Deserialize, Serialize};

/// Forum category. Every category is itself a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub page_id: PageId,
    /// Parent category, or the forum root for main categories
    #[serde(default)]
    pub parent_id: Option<PageId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub position: i32,
}

impl Category {
    pub fn is_child_of(&self, parent: &PageId) -> bool {
        self.parent_id.as_ref() == Some(parent)
    }
}

/// All categories of one forum, main and sub categories alike
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub forum_id: PageId,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "forumId": "1",
            "categories": [
                { "pageId": "42", "parentId": "1", "name": "General", "slug": "general" }
            ]
        }"#;
        let response: CategoryListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.forum_id, PageId::from("1"));
        let category = &response.categories[0];
        assert_eq!(category.page_id, PageId::from("42"));
        assert!(category.is_child_of(&PageId::from("1")));
        assert_eq!(category.position, 0);
        assert!(category.description.is_none());
    }
}
