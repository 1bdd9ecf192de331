//! Жест перетаскивания заголовка колонки.
//!
//! Контроллер держит id перетаскиваемой колонки и текущую цель; сама
//! перестановка делегируется `ColumnModel::move_column`. Drop на себя или
//! вне валидной цели — no-op без уведомления хоста.

use super::column_model::ColumnModel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderController {
    dragging: Option<String>,
    over: Option<String>,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Текущая колонка под указателем — для подсветки цели.
    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }

    /// Начало перетаскивания. Синтетические и неизвестные колонки в пул
    /// перетаскивания не входят.
    pub fn begin(&mut self, model: &ColumnModel, column_id: &str) -> bool {
        if !model.is_draggable(column_id) {
            return false;
        }
        self.dragging = Some(column_id.to_string());
        self.over = None;
        true
    }

    pub fn drag_over(&mut self, model: &ColumnModel, column_id: &str) {
        if self.dragging.is_none() {
            return;
        }
        self.over = if model.is_draggable(column_id) {
            Some(column_id.to_string())
        } else {
            None
        };
    }

    /// Drop на колонку-цель. Возвращает true, если порядок в модели
    /// изменился (и хосту следует отправить `on_column_reorder`).
    pub fn drop_on(&mut self, model: &mut ColumnModel, target_id: &str) -> bool {
        let Some(source) = self.dragging.take() else {
            return false;
        };
        self.over = None;
        let moved = model.move_column(&source, target_id);
        if moved {
            log::debug!("reorder committed: {} -> {}", source, target_id);
        }
        moved
    }

    /// Конец жеста без валидного drop (dragend вне целей, отмена).
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::grid::{ColumnDescriptor, GridCapabilities};

    fn model(selectable: bool) -> ColumnModel {
        ColumnModel::merge(
            vec![
                ColumnDescriptor::new("name", "Имя", "name"),
                ColumnDescriptor::new("city", "Город", "city"),
                ColumnDescriptor::new("email", "Email", "email"),
            ],
            GridCapabilities {
                selectable,
                has_actions: selectable,
            },
        )
    }

    fn ids(model: &ColumnModel) -> Vec<&str> {
        model.columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_drop_commits_array_move() {
        let mut model = model(false);
        let mut ctl = ReorderController::new();
        assert!(ctl.begin(&model, "city"));
        assert!(ctl.drop_on(&mut model, "name"));
        assert_eq!(ids(&model), ["city", "name", "email"]);
        assert_eq!(ctl.dragging(), None);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut model = model(false);
        let mut ctl = ReorderController::new();
        ctl.begin(&model, "city");
        assert!(!ctl.drop_on(&mut model, "city"));
        assert_eq!(ids(&model), ["name", "city", "email"]);
    }

    #[test]
    fn test_synthetic_columns_excluded_from_pool() {
        let mut model = model(true);
        let mut ctl = ReorderController::new();
        assert!(!ctl.begin(&model, "select"));
        assert!(!ctl.begin(&model, "actions"));

        ctl.begin(&model, "name");
        assert!(!ctl.drop_on(&mut model, "select"));
        assert_eq!(ids(&model), ["select", "name", "city", "email", "actions"]);
    }

    #[test]
    fn test_reorder_keeps_synthetic_positions() {
        let mut model = model(true);
        let mut ctl = ReorderController::new();
        ctl.begin(&model, "email");
        assert!(ctl.drop_on(&mut model, "name"));
        assert_eq!(ids(&model), ["select", "email", "name", "city", "actions"]);
    }

    #[test]
    fn test_cancel_clears_state_without_move() {
        let mut model = model(false);
        let mut ctl = ReorderController::new();
        ctl.begin(&model, "city");
        ctl.drag_over(&model, "email");
        assert_eq!(ctl.over(), Some("email"));
        ctl.cancel();
        assert_eq!(ctl.dragging(), None);
        assert_eq!(ctl.over(), None);
        assert!(!ctl.drop_on(&mut model, "name"));
        assert_eq!(ids(&model), ["name", "city", "email"]);
    }
}
