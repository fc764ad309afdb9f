use contracts::domain::a001_forum_category::aggregate::CategoryListResponse;
use contracts::domain::common::PageId;

use crate::shared::api_utils::{get_json, ApiError};

/// Fetch all categories of a forum
pub async fn fetch_categories(forum_id: &PageId) -> Result<CategoryListResponse, ApiError> {
    let path = format!(
        "/-/list-categories?forumId={}",
        urlencoding::encode(forum_id.as_str())
    );
    get_json(&path, None).await
}
