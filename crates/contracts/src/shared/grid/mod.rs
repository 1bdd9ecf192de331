//! Контракт интерактивной таблицы: типы, которыми обмениваются грид и хост.
//!
//! Грид не выполняет ни запросов, ни фильтрации, ни сортировки данных —
//! он лишь описывает намерение пользователя этими типами, а хост решает,
//! перезапросить ли данные или пересобрать их на клиенте.

pub mod columns;
pub mod filters;
pub mod pagination;
pub mod sort;

pub use columns::{
    ColumnDescriptor, ColumnLayoutSnapshot, GridCapabilities, TextDirection, ACTIONS_COLUMN_ID,
    SELECT_COLUMN_ID,
};
pub use filters::{
    FilterFieldDescriptor, FilterFieldState, FilterFieldType, FilterOperator, FilterQuery,
};
pub use pagination::{PaginationState, PAGE_SIZE_OPTIONS};
pub use sort::{ActiveSort, SortDirection, SortState};
