use contracts::domain::d001_client::Client;
use contracts::shared::grid::{FilterQuery, PaginationState, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ClientsListState {
    /// Строки текущей страницы (после фильтра/сортировки/среза).
    pub items: Vec<Client>,
    pub quick_search: String,
    pub filter: FilterQuery,
    pub sort: SortState,
    pub pagination: PaginationState,
    pub is_loaded: bool,
}

impl Default for ClientsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            quick_search: String::new(),
            filter: FilterQuery::default(),
            sort: SortState::none(),
            pagination: PaginationState::new(0, 25),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ClientsListState> {
    RwSignal::new(ClientsListState::default())
}
