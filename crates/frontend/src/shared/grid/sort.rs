//! Трёхтактный цикл сортировки: None → Asc → Desc → None, одна активная
//! колонка на грид. Сам грид данные не сортирует — новое состояние уходит
//! хосту через `on_sort`.

use contracts::shared::grid::{SortDirection, SortState};

use super::column_model::ColumnModel;

/// Продвигает цикл сортировки по клику на колонке `column_id`.
///
/// Клик по другой колонке сбрасывает прежнюю и начинает цикл заново с
/// Ascending. Неизвестные, несортируемые и синтетические колонки дают
/// None — вызывающий ничего не меняет и не уведомляет хост.
pub fn advance_sort(model: &ColumnModel, current: &SortState, column_id: &str) -> Option<SortState> {
    let col = model.get(column_id)?;
    if !col.sortable || col.is_synthetic() {
        return None;
    }
    let next = match current.direction_for(column_id) {
        None => SortState::by(column_id, SortDirection::Ascending),
        Some(SortDirection::Ascending) => SortState::by(column_id, SortDirection::Descending),
        Some(SortDirection::Descending) => SortState::none(),
    };
    Some(next)
}

/// Индикатор сортировки для заголовка.
pub fn sort_indicator(state: &SortState, column_id: &str) -> &'static str {
    match state.direction_for(column_id) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора: активный выделен, неактивный приглушён.
pub fn sort_class(state: &SortState, column_id: &str) -> &'static str {
    if state.direction_for(column_id).is_some() {
        "grid__sort-indicator grid__sort-indicator--active"
    } else {
        "grid__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::grid::{ColumnDescriptor, GridCapabilities};

    fn model() -> ColumnModel {
        ColumnModel::merge(
            vec![
                ColumnDescriptor::new("name", "Имя", "name"),
                ColumnDescriptor::new("city", "Город", "city"),
                ColumnDescriptor::new("id", "ID", "id").not_sortable(),
            ],
            GridCapabilities {
                selectable: true,
                has_actions: true,
            },
        )
    }

    #[test]
    fn test_three_click_cycle() {
        let model = model();
        let s1 = advance_sort(&model, &SortState::none(), "city").unwrap();
        assert_eq!(s1.direction_for("city"), Some(SortDirection::Ascending));
        let s2 = advance_sort(&model, &s1, "city").unwrap();
        assert_eq!(s2.direction_for("city"), Some(SortDirection::Descending));
        let s3 = advance_sort(&model, &s2, "city").unwrap();
        assert_eq!(s3, SortState::none());
    }

    #[test]
    fn test_second_column_resets_first() {
        let model = model();
        let city_asc = advance_sort(&model, &SortState::none(), "city").unwrap();
        let after = advance_sort(&model, &city_asc, "name").unwrap();
        assert_eq!(after.direction_for("city"), None);
        assert_eq!(after.direction_for("name"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_unsortable_and_synthetic_columns_are_noop() {
        let model = model();
        assert_eq!(advance_sort(&model, &SortState::none(), "id"), None);
        assert_eq!(advance_sort(&model, &SortState::none(), "select"), None);
        assert_eq!(advance_sort(&model, &SortState::none(), "actions"), None);
        assert_eq!(advance_sort(&model, &SortState::none(), "missing"), None);
    }

    #[test]
    fn test_indicator_reflects_state() {
        let state = SortState::by("city", SortDirection::Ascending);
        assert_eq!(sort_indicator(&state, "city"), " ▲");
        assert_eq!(sort_indicator(&state, "name"), " ⇅");
    }
}
