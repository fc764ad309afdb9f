//! Category tree helpers: main categories and drill-down selection paths

use contracts::domain::a001_forum_category::aggregate::Category;
use contracts::domain::common::PageId;

/// Categories directly below the forum root, in display order
pub fn main_categories(categories: &[Category], forum_id: &PageId) -> Vec<Category> {
    let mut main: Vec<Category> = categories
        .iter()
        .filter(|c| c.is_child_of(forum_id))
        .cloned()
        .collect();
    main.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));
    main
}

/// Path from the main category down to the category with `slug`.
///
/// Returns `None` for an unknown slug. The walk stops at the first ancestor
/// that is not in `categories` (the forum root) and never visits a category
/// twice, so cyclic parent links cannot hang the page.
pub fn selection_path(categories: &[Category], slug: &str) -> Option<Vec<Category>> {
    let target = categories.iter().find(|c| c.slug == slug)?;

    let mut path = vec![target.clone()];
    let mut parent_id = target.parent_id.clone();
    while let Some(id) = parent_id {
        let Some(parent) = categories.iter().find(|c| c.page_id == id) else {
            break;
        };
        if path.iter().any(|c| c.page_id == parent.page_id) {
            log::warn!("Category parent cycle at {}", parent.page_id);
            break;
        }
        path.push(parent.clone());
        parent_id = parent.parent_id.clone();
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
pub(crate) fn category(page_id: &str, parent_id: Option<&str>, slug: &str, position: i32) -> Category {
    Category {
        page_id: PageId::from(page_id),
        parent_id: parent_id.map(PageId::from),
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forum() -> Vec<Category> {
        vec![
            category("10", Some("1"), "general", 2),
            category("11", Some("1"), "announcements", 1),
            category("20", Some("10"), "help", 0),
            category("30", Some("20"), "installation", 0),
        ]
    }

    fn slugs(path: &[Category]) -> Vec<&str> {
        path.iter().map(|c| c.slug.as_str()).collect()
    }

    #[test]
    fn test_main_categories_sorted_by_position() {
        let main = main_categories(&forum(), &PageId::from("1"));
        assert_eq!(slugs(&main), vec!["announcements", "general"]);
    }

    #[test]
    fn test_path_to_main_category() {
        let path = selection_path(&forum(), "general").unwrap();
        assert_eq!(slugs(&path), vec!["general"]);
    }

    #[test]
    fn test_path_to_nested_category_is_root_first() {
        let path = selection_path(&forum(), "installation").unwrap();
        assert_eq!(slugs(&path), vec!["general", "help", "installation"]);
        assert_eq!(path.last().unwrap().page_id, PageId::from("30"));
    }

    #[test]
    fn test_unknown_slug() {
        assert!(selection_path(&forum(), "nope").is_none());
    }

    #[test]
    fn test_cycle_terminates() {
        let categories = vec![
            category("1", Some("2"), "a", 0),
            category("2", Some("1"), "b", 0),
        ];
        let path = selection_path(&categories, "a").unwrap();
        assert_eq!(slugs(&path), vec!["b", "a"]);
    }
}
