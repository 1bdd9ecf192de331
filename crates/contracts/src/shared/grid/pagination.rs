use serde::{Deserialize, Serialize};

/// Допустимые размеры страницы.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Состояние пагинации. Владеет им хост; грид только отображает
/// контролы и пробрасывает запросы смены страницы/размера.
///
/// Страницы нумеруются с 1. `total_pages` всегда ≥ 1, даже для пустого
/// набора данных (хосту при `total_items == 0` следует вовсе не
/// передавать пагинацию в грид).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: usize,
}

impl PaginationState {
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        let mut state = Self {
            current_page: 1,
            total_pages: 1,
            total_items,
            items_per_page: items_per_page.max(1),
        };
        state.recalc(total_items);
        state
    }

    /// Пересчитывает число страниц после изменения набора данных и
    /// прижимает текущую страницу к допустимому диапазону.
    pub fn recalc(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.total_pages = if total_items == 0 {
            1
        } else {
            (total_items + self.items_per_page - 1) / self.items_per_page
        };
        if self.current_page > self.total_pages {
            self.current_page = self.total_pages;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }

    /// Смена размера страницы всегда возвращает на первую страницу.
    pub fn set_items_per_page(&mut self, size: usize) {
        self.items_per_page = size.max(1);
        self.current_page = 1;
        self.recalc(self.total_items);
    }

    /// Границы текущей страницы для среза массива длиной `len`.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.current_page - 1) * self.items_per_page;
        let start = start.min(len);
        let end = (start + self.items_per_page).min(len);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalc_rounds_up() {
        let state = PaginationState::new(101, 25);
        assert_eq!(state.total_pages, 5);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_empty_data_keeps_one_page() {
        let state = PaginationState::new(0, 50);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let mut state = PaginationState::new(500, 10);
        state.current_page = 7;
        state.set_items_per_page(100);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 5);
    }

    #[test]
    fn test_current_page_clamped_when_data_shrinks() {
        let mut state = PaginationState::new(100, 10);
        state.current_page = 10;
        state.recalc(42);
        assert_eq!(state.total_pages, 5);
        assert_eq!(state.current_page, 5);
    }

    #[test]
    fn test_slice_bounds() {
        let mut state = PaginationState::new(42, 10);
        state.current_page = 5;
        assert_eq!(state.slice_bounds(42), (40, 42));
        assert_eq!(PaginationState::new(42, 10).slice_bounds(42), (0, 10));
    }
}
