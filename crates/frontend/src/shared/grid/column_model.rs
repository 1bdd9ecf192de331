//! Модель колонок: канонический упорядоченный список описаний колонок
//! плюс синтетические колонки select/actions, добавляемые самим гридом.
//!
//! Все мутации (перестановка, ширина, видимость) идут через модель;
//! контроллеры жестов и рендер работают только с её API.

use std::collections::HashMap;

use contracts::shared::grid::{
    ColumnDescriptor, GridCapabilities, ACTIONS_COLUMN_ID, SELECT_COLUMN_ID,
};

/// Ширина синтетической колонки выбора, px.
const SELECT_COLUMN_WIDTH: f64 = 44.0;

/// Минимальная ширина колонки действий, px.
const ACTIONS_MIN_WIDTH: f64 = 60.0;

fn select_column() -> ColumnDescriptor {
    ColumnDescriptor::new(SELECT_COLUMN_ID, "", "")
        .with_min_width(SELECT_COLUMN_WIDTH)
        .with_width(SELECT_COLUMN_WIDTH)
        .not_sortable()
}

fn actions_column() -> ColumnDescriptor {
    ColumnDescriptor::new(ACTIONS_COLUMN_ID, "", "")
        .with_min_width(ACTIONS_MIN_WIDTH)
        .with_width(96.0)
        .not_sortable()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnModel {
    columns: Vec<ColumnDescriptor>,
    /// Исходные ширины хоста, для reset_width.
    initial_widths: HashMap<String, f64>,
}

impl ColumnModel {
    /// Собирает модель из колонок хоста и синтетических колонок:
    /// select всегда первая, actions всегда последняя, колонки хоста —
    /// между ними в заданном хостом порядке. Колонки хоста с
    /// зарезервированным или повторяющимся id отбрасываются.
    pub fn merge(host_columns: Vec<ColumnDescriptor>, caps: GridCapabilities) -> Self {
        let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(host_columns.len() + 2);
        if caps.selectable {
            columns.push(select_column());
        }
        for mut col in host_columns {
            if col.is_synthetic() {
                log::warn!("колонка с зарезервированным id '{}' отброшена", col.id);
                continue;
            }
            if columns.iter().any(|c| c.id == col.id) {
                log::warn!("колонка с повторяющимся id '{}' отброшена", col.id);
                continue;
            }
            col.width = col.width.max(col.min_width);
            columns.push(col);
        }
        if caps.has_actions {
            columns.push(actions_column());
        }

        let initial_widths = columns.iter().map(|c| (c.id.clone(), c.width)).collect();
        Self {
            columns,
            initial_widths,
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Видимые колонки в порядке отрисовки.
    pub fn visible_columns(&self) -> Vec<ColumnDescriptor> {
        self.columns.iter().filter(|c| c.visible).cloned().collect()
    }

    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|c| c.visible).count()
    }

    /// Колонки хоста (без синтетических) в текущем порядке — payload
    /// для `on_column_reorder`.
    pub fn host_columns(&self) -> Vec<ColumnDescriptor> {
        self.columns
            .iter()
            .filter(|c| !c.is_synthetic())
            .cloned()
            .collect()
    }

    pub fn get(&self, column_id: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn index_of(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Последняя видимая колонка не имеет ручки ресайза справа.
    pub fn is_last_visible(&self, column_id: &str) -> bool {
        self.columns
            .iter()
            .rev()
            .find(|c| c.visible)
            .map(|c| c.id == column_id)
            .unwrap_or(false)
    }

    /// Меняет видимость колонки. Синтетические колонки скрыть нельзя;
    /// неизвестный id — no-op. Возвращает true, если что-то поменялось.
    pub fn set_visibility(&mut self, column_id: &str, visible: bool) -> bool {
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(col) if !col.is_synthetic() && col.visible != visible => {
                col.visible = visible;
                true
            }
            _ => false,
        }
    }

    /// Устанавливает ширину с прижатием к min_width (верхней границы нет).
    /// Возвращает фактически применённую ширину, None для неизвестного id.
    pub fn apply_width(&mut self, column_id: &str, requested: f64) -> Option<f64> {
        let col = self.columns.iter_mut().find(|c| c.id == column_id)?;
        col.width = requested.max(col.min_width);
        Some(col.width)
    }

    /// Возвращает колонке исходную (хостовую) ширину.
    pub fn reset_width(&mut self, column_id: &str) -> Option<f64> {
        let initial = *self.initial_widths.get(column_id)?;
        self.apply_width(column_id, initial)
    }

    /// Меняет подпись колонки (локализация). Раскладку не трогает.
    pub fn set_label(&mut self, column_id: &str, label: &str) -> bool {
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(col) => {
                col.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Можно ли таскать колонку (синтетические исключены из пула).
    pub fn is_draggable(&self, column_id: &str) -> bool {
        self.get(column_id).map(|c| !c.is_synthetic()).unwrap_or(false)
    }

    /// Классический array move: колонка `from_id` вынимается и вставляется
    /// на место `to_id`, промежуточные сдвигаются. Обе колонки должны быть
    /// колонками данных; перенос колонки на саму себя — no-op.
    /// Возвращает true, если порядок изменился.
    pub fn move_column(&mut self, from_id: &str, to_id: &str) -> bool {
        if from_id == to_id || !self.is_draggable(from_id) || !self.is_draggable(to_id) {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(from_id), self.index_of(to_id)) else {
            return false;
        };
        let col = self.columns.remove(from);
        self.columns.insert(to, col);
        true
    }

    /// Перенос колонки на одну позицию влево (клавиатурный вариант).
    /// Семантика итогового порядка совпадает с drag-and-drop.
    pub fn move_left(&mut self, column_id: &str) -> bool {
        let Some(index) = self.index_of(column_id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        let target_id = self.columns[index - 1].id.clone();
        self.move_column(column_id, &target_id)
    }

    /// Перенос колонки на одну позицию вправо.
    pub fn move_right(&mut self, column_id: &str) -> bool {
        let Some(index) = self.index_of(column_id) else {
            return false;
        };
        if index + 1 >= self.columns.len() {
            return false;
        }
        let target_id = self.columns[index + 1].id.clone();
        self.move_column(column_id, &target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(ids: &[&str]) -> Vec<ColumnDescriptor> {
        ids.iter().map(|id| ColumnDescriptor::new(id, id, id)).collect()
    }

    fn ids(model: &ColumnModel) -> Vec<&str> {
        model.columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_merge_places_synthetic_columns_at_fixed_positions() {
        let model = ColumnModel::merge(
            host(&["name", "city"]),
            GridCapabilities {
                selectable: true,
                has_actions: true,
            },
        );
        assert_eq!(ids(&model), ["select", "name", "city", "actions"]);
    }

    #[test]
    fn test_merge_without_capabilities_keeps_host_order_only() {
        let model = ColumnModel::merge(host(&["b", "a", "c"]), GridCapabilities::default());
        assert_eq!(ids(&model), ["b", "a", "c"]);
    }

    #[test]
    fn test_merge_drops_reserved_and_duplicate_ids() {
        let mut columns = host(&["name", "name"]);
        columns.push(ColumnDescriptor::new("select", "x", "x"));
        let model = ColumnModel::merge(columns, GridCapabilities::default());
        assert_eq!(ids(&model), ["name"]);
    }

    #[test]
    fn test_set_visibility_never_hides_synthetic_columns() {
        let mut model = ColumnModel::merge(
            host(&["name"]),
            GridCapabilities {
                selectable: true,
                has_actions: true,
            },
        );
        assert!(!model.set_visibility("select", false));
        assert!(!model.set_visibility("actions", false));
        assert!(model.set_visibility("name", false));
        assert_eq!(model.visible_count(), 2);
    }

    #[test]
    fn test_apply_width_clamps_to_min() {
        let mut model = ColumnModel::merge(
            vec![ColumnDescriptor::new("name", "Имя", "name").with_min_width(150.0)],
            GridCapabilities::default(),
        );
        assert_eq!(model.apply_width("name", 80.0), Some(150.0));
        assert_eq!(model.apply_width("name", 1500.0), Some(1500.0));
        assert_eq!(model.apply_width("missing", 200.0), None);
    }

    #[test]
    fn test_reset_width_restores_host_width() {
        let mut model = ColumnModel::merge(
            vec![ColumnDescriptor::new("name", "Имя", "name").with_width(220.0)],
            GridCapabilities::default(),
        );
        model.apply_width("name", 400.0);
        assert_eq!(model.reset_width("name"), Some(220.0));
    }

    #[test]
    fn test_move_column_shifts_intermediates_and_keeps_widths() {
        let mut columns = host(&["name", "city", "email"]);
        columns[0].width = 200.0;
        columns[1].width = 150.0;
        columns[2].width = 200.0;
        let mut model = ColumnModel::merge(columns, GridCapabilities::default());

        assert!(model.move_column("city", "name"));
        assert_eq!(ids(&model), ["city", "name", "email"]);
        let widths: Vec<f64> = model.columns().iter().map(|c| c.width).collect();
        assert_eq!(widths, [150.0, 200.0, 200.0]);
    }

    #[test]
    fn test_move_column_onto_itself_is_noop() {
        let mut model = ColumnModel::merge(host(&["name", "city"]), GridCapabilities::default());
        assert!(!model.move_column("city", "city"));
        assert_eq!(ids(&model), ["name", "city"]);
    }

    #[test]
    fn test_move_never_crosses_synthetic_columns() {
        let mut model = ColumnModel::merge(
            host(&["name", "city"]),
            GridCapabilities {
                selectable: true,
                has_actions: true,
            },
        );
        assert!(!model.move_column("name", "select"));
        assert!(!model.move_column("name", "actions"));
        assert!(!model.move_left("name"));
        assert!(!model.move_right("city"));
        assert_eq!(ids(&model), ["select", "name", "city", "actions"]);
    }

    #[test]
    fn test_keyboard_move_matches_drag_semantics() {
        let mut dragged = ColumnModel::merge(host(&["a", "b", "c"]), GridCapabilities::default());
        let mut stepped = dragged.clone();

        dragged.move_column("c", "a");
        stepped.move_left("c");
        stepped.move_left("c");
        assert_eq!(dragged.columns(), stepped.columns());
    }

    #[test]
    fn test_is_last_visible_ignores_hidden_columns() {
        let mut model = ColumnModel::merge(host(&["a", "b", "c"]), GridCapabilities::default());
        model.set_visibility("c", false);
        assert!(model.is_last_visible("b"));
        assert!(!model.is_last_visible("c"));
    }
}
