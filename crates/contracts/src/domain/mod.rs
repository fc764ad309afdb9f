pub mod a001_forum_category;
pub mod common;
