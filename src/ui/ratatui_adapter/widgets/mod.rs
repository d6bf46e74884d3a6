//! Ratatui widgets for the template picker

mod detail_pane;
mod help_bar;
mod item_list;
mod search_bar;

pub use detail_pane::DetailPane;
pub use help_bar::{DEFAULT_HINTS, HelpBar, KeyHint};
pub use item_list::ItemList;
pub use search_bar::SearchBar;
