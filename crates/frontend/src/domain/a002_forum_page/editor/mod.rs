//! New-page editor
//!
//! - service.rs: [`PageEditor`] seam and the draft state
//! - view.rs: dialog that shows the open draft

mod service;
mod view;

pub use service::{EditorService, NewPageDraft, PageEditor};
pub use view::NewPageEditor;
