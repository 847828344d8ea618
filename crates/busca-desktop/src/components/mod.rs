//! UI Components
//!
//! Reusable UI components for the desktop application.

mod result_list;
mod search_bar;

pub use result_list::ResultList;
pub use search_bar::SearchBar;
