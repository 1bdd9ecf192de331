//! Ядро интерактивной таблицы: модель колонок и контроллеры жестов.
//!
//! Всё в этом модуле — чистые машины состояний без DOM: их гоняют
//! юнит-тесты, а компоненты из `shared::components::grid` подключают
//! их к событиям браузера.

pub mod column_model;
pub mod filters;
pub mod locale;
pub mod reorder;
pub mod resize;
pub mod selection;
pub mod sort;

pub use column_model::ColumnModel;
pub use filters::FilterSidebarState;
pub use locale::{apply_labels, grid_text, GridLocale, LOCALE_EN, LOCALE_RU};
pub use reorder::ReorderController;
pub use resize::{ResizeCommit, ResizeController};
pub use selection::{index_key, CheckboxTriState, RowKey, SelectionController};
pub use sort::{advance_sort, sort_class, sort_indicator};
