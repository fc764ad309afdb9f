//! Category selector
//!
//! - view_model.rs: selection state and the category actions
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategorySelector;
pub use view_model::CategorySelectorViewModel;
