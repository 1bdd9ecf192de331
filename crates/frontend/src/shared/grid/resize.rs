//! Жест изменения ширины колонки: Idle → Resizing → Idle.
//!
//! Контроллер чистый: координаты указателя приходят снаружи (из DOM-слоя),
//! здесь только арифметика ширины и дисциплина переходов. Промежуточные
//! ширины пишутся в модель колонок синхронно (живой отклик), внешнее
//! уведомление `on_column_resize` отправляется один раз на жест.

use contracts::shared::grid::TextDirection;

use super::column_model::ColumnModel;

#[derive(Debug, Clone, PartialEq)]
struct ResizingState {
    column_id: String,
    start_x: f64,
    start_width: f64,
    min_width: f64,
    direction: TextDirection,
    /// Ширина после последнего движения указателя.
    last_width: f64,
    moved: bool,
}

/// Итог завершённого жеста.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeCommit {
    pub column_id: String,
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResizeController {
    state: Option<ResizingState>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_some()
    }

    /// Начинает жест. Отказывает, если колонка неизвестна, скрыта или
    /// является последней видимой (у неё нет правой ручки).
    pub fn begin(
        &mut self,
        model: &ColumnModel,
        column_id: &str,
        pointer_x: f64,
        direction: TextDirection,
    ) -> bool {
        if self.state.is_some() {
            return false;
        }
        let Some(col) = model.get(column_id) else {
            return false;
        };
        if !col.visible || model.is_last_visible(column_id) {
            return false;
        }
        self.state = Some(ResizingState {
            column_id: column_id.to_string(),
            start_x: pointer_x,
            start_width: col.width,
            min_width: col.min_width,
            direction,
            last_width: col.width,
            moved: false,
        });
        true
    }

    /// Движение указателя: новая ширина `start + (x - start_x)`, прижатая
    /// к min_width. В RTL-раскладке знак дельты инвертируется, чтобы ручка
    /// следовала за визуальным краем колонки.
    pub fn track(&mut self, pointer_x: f64) -> Option<(String, f64)> {
        let state = self.state.as_mut()?;
        let mut delta = pointer_x - state.start_x;
        if state.direction == TextDirection::Rtl {
            delta = -delta;
        }
        let width = (state.start_width + delta).max(state.min_width);
        state.last_width = width;
        state.moved = true;
        Some((state.column_id.clone(), width))
    }

    /// Завершает жест (mouseup где угодно в документе). Возвращает итог
    /// для единственного внешнего уведомления; None, если жеста не было
    /// или указатель так и не сдвинулся.
    pub fn end(&mut self) -> Option<ResizeCommit> {
        let state = self.state.take()?;
        if !state.moved {
            return None;
        }
        log::debug!(
            "resize committed: column={} width={}",
            state.column_id,
            state.last_width
        );
        Some(ResizeCommit {
            column_id: state.column_id,
            width: state.last_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::grid::{ColumnDescriptor, GridCapabilities};

    fn model() -> ColumnModel {
        ColumnModel::merge(
            vec![
                ColumnDescriptor::new("name", "Имя", "name")
                    .with_min_width(150.0)
                    .with_width(200.0),
                ColumnDescriptor::new("city", "Город", "city").with_width(150.0),
            ],
            GridCapabilities::default(),
        )
    }

    #[test]
    fn test_begin_rejects_unknown_and_last_visible_column() {
        let model = model();
        let mut ctl = ResizeController::new();
        assert!(!ctl.begin(&model, "missing", 0.0, TextDirection::Ltr));
        assert!(!ctl.begin(&model, "city", 0.0, TextDirection::Ltr));
        assert!(ctl.begin(&model, "name", 100.0, TextDirection::Ltr));
    }

    #[test]
    fn test_track_applies_delta() {
        let model = model();
        let mut ctl = ResizeController::new();
        ctl.begin(&model, "name", 100.0, TextDirection::Ltr);
        assert_eq!(ctl.track(140.0), Some(("name".to_string(), 240.0)));
        assert_eq!(ctl.track(90.0), Some(("name".to_string(), 190.0)));
    }

    #[test]
    fn test_track_clamps_to_min_width() {
        let model = model();
        let mut ctl = ResizeController::new();
        ctl.begin(&model, "name", 100.0, TextDirection::Ltr);
        // Дельта −120 при ширине 200 и min 150 прижимается к 150, не 80.
        assert_eq!(ctl.track(-20.0), Some(("name".to_string(), 150.0)));
        let commit = ctl.end().unwrap();
        assert_eq!(commit.width, 150.0);
    }

    #[test]
    fn test_rtl_flips_delta_sign() {
        let model = model();
        let mut ctl = ResizeController::new();
        ctl.begin(&model, "name", 100.0, TextDirection::Rtl);
        // Движение вправо в RTL сужает колонку.
        assert_eq!(ctl.track(140.0), Some(("name".to_string(), 160.0)));
        assert_eq!(ctl.track(60.0), Some(("name".to_string(), 240.0)));
    }

    #[test]
    fn test_end_without_movement_commits_nothing() {
        let model = model();
        let mut ctl = ResizeController::new();
        ctl.begin(&model, "name", 100.0, TextDirection::Ltr);
        assert_eq!(ctl.end(), None);
        assert!(!ctl.is_resizing());
    }

    #[test]
    fn test_one_gesture_one_commit() {
        let model = model();
        let mut ctl = ResizeController::new();
        ctl.begin(&model, "name", 100.0, TextDirection::Ltr);
        ctl.track(120.0);
        ctl.track(180.0);
        let commit = ctl.end().unwrap();
        assert_eq!(commit.width, 280.0);
        // Повторный end после возврата в Idle ничего не даёт.
        assert_eq!(ctl.end(), None);
    }
}
