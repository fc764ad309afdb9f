pub mod api;
pub mod path;
pub mod service;
pub mod ui;

pub use service::{CategorySelection, CategoryService};
