use serde::{Deserialize, Serialize};

/// Зарезервированный id синтетической колонки с чекбоксами выбора строк.
pub const SELECT_COLUMN_ID: &str = "select";

/// Зарезервированный id синтетической колонки с кнопками действий.
pub const ACTIONS_COLUMN_ID: &str = "actions";

/// Ширина колонки по умолчанию, px.
pub const DEFAULT_COLUMN_WIDTH: f64 = 160.0;

/// Минимальная ширина колонки по умолчанию, px.
pub const DEFAULT_MIN_WIDTH: f64 = 80.0;

/// Описание одной колонки таблицы.
///
/// `id` должен быть уникален в пределах одного грида; значения `"select"` и
/// `"actions"` зарезервированы за синтетическими колонками и хостом не
/// используются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub id: String,
    pub label: String,
    /// Имя поля строки, из которого берётся значение ячейки.
    pub accessor: String,
    pub width: f64,
    #[serde(rename = "minWidth")]
    pub min_width: f64,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnDescriptor {
    pub fn new(id: &str, label: &str, accessor: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            accessor: accessor.to_string(),
            width: DEFAULT_COLUMN_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            sortable: true,
            visible: true,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width.max(self.min_width);
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self.width = self.width.max(min_width);
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Синтетическая колонка (select/actions)?
    pub fn is_synthetic(&self) -> bool {
        self.id == SELECT_COLUMN_ID || self.id == ACTIONS_COLUMN_ID
    }
}

/// Какие синтетические колонки добавляет грид.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCapabilities {
    /// Добавить колонку выбора строк (первой).
    pub selectable: bool,
    /// Добавить колонку действий (последней).
    pub has_actions: bool,
}

/// Направление раскладки. Влияет на атрибут `dir` таблицы и на знак
/// дельты при изменении ширины колонки.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    #[serde(rename = "ltr")]
    Ltr,
    #[serde(rename = "rtl")]
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Снимок раскладки колонок для сохранения на стороне хоста.
///
/// Грид сам ничего не сохраняет: хост ловит `on_column_reorder` /
/// `on_column_resize`, собирает снимок и при следующем рендере передаёт
/// колонки уже с сохранёнными порядком и ширинами.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayoutSnapshot {
    /// Порядок колонок хоста (синтетические не входят).
    pub order: Vec<String>,
    /// Ширины по id колонки.
    pub widths: Vec<(String, f64)>,
}

impl ColumnLayoutSnapshot {
    /// Собирает снимок из текущего списка колонок, пропуская синтетические.
    pub fn capture(columns: &[ColumnDescriptor]) -> Self {
        let data: Vec<&ColumnDescriptor> =
            columns.iter().filter(|c| !c.is_synthetic()).collect();
        Self {
            order: data.iter().map(|c| c.id.clone()).collect(),
            widths: data.iter().map(|c| (c.id.clone(), c.width)).collect(),
        }
    }

    /// Применяет снимок к описаниям колонок хоста: переставляет известные
    /// колонки в сохранённый порядок и восстанавливает ширины. Колонки,
    /// которых в снимке нет, остаются в конце в исходном порядке; записи
    /// снимка без соответствующей колонки игнорируются.
    pub fn apply(&self, columns: Vec<ColumnDescriptor>) -> Vec<ColumnDescriptor> {
        let mut rest: Vec<Option<ColumnDescriptor>> = columns.into_iter().map(Some).collect();
        let mut result: Vec<ColumnDescriptor> = Vec::with_capacity(rest.len());

        for id in &self.order {
            if let Some(slot) = rest.iter_mut().find(|c| {
                c.as_ref().map(|c| &c.id == id).unwrap_or(false)
            }) {
                if let Some(col) = slot.take() {
                    result.push(col);
                }
            }
        }
        result.extend(rest.into_iter().flatten());

        for (id, width) in &self.widths {
            if let Some(col) = result.iter_mut().find(|c| &c.id == id) {
                col.width = width.max(col.min_width);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(ids: &[&str]) -> Vec<ColumnDescriptor> {
        ids.iter().map(|id| ColumnDescriptor::new(id, id, id)).collect()
    }

    #[test]
    fn test_width_clamped_to_min() {
        let col = ColumnDescriptor::new("name", "Имя", "name")
            .with_min_width(120.0)
            .with_width(50.0);
        assert_eq!(col.width, 120.0);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let snapshot = ColumnLayoutSnapshot::capture(&cols(&["name", "city", "email"]));
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: ColumnLayoutSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_snapshot_apply_reorders_and_restores_widths() {
        let mut original = cols(&["name", "city", "email"]);
        original[1].width = 240.0;
        let mut snapshot = ColumnLayoutSnapshot::capture(&original);
        snapshot.order = vec!["city".into(), "email".into(), "name".into()];

        let applied = snapshot.apply(cols(&["name", "city", "email"]));
        let ids: Vec<&str> = applied.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["city", "email", "name"]);
        assert_eq!(applied[0].width, 240.0);
    }

    #[test]
    fn test_snapshot_apply_ignores_stale_entries() {
        let snapshot = ColumnLayoutSnapshot {
            order: vec!["gone".into(), "city".into()],
            widths: vec![("gone".into(), 300.0)],
        };
        let applied = snapshot.apply(cols(&["name", "city"]));
        let ids: Vec<&str> = applied.iter().map(|c| c.id.as_str()).collect();
        // Неизвестный id из снимка пропущен, остальные колонки — в конце.
        assert_eq!(ids, ["city", "name"]);
    }
}
