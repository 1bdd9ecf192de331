pub mod actions_cell;
pub mod cell_checkbox;
pub mod data_grid;
pub mod header_cell;
pub mod header_checkbox;
pub mod pagination_strip;
pub mod search_input;
pub mod search_sidebar;

pub use data_grid::DataGrid;
pub use pagination_strip::{page_window, PageItem, PaginationStrip};
pub use search_input::{highlight_matches, GridSearchInput, MIN_SEARCH_LEN};
pub use search_sidebar::SearchSidebar;
