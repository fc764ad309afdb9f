//! Types shared by all forum pages

pub mod page_id;
pub mod page_role;

pub use page_id::PageId;
pub use page_role::PageRole;
