pub mod a001_forum_category;
pub mod a002_forum_page;
