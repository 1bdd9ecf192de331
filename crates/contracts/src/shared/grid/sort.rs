use serde::{Deserialize, Serialize};

/// Направление сортировки одной колонки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Активная сортировка: колонка + направление.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSort {
    #[serde(rename = "columnId")]
    pub column_id: String,
    pub direction: SortDirection,
}

/// Состояние сортировки грида.
///
/// Сортировка одноколоночная: либо ни одна колонка не отсортирована,
/// либо ровно одна — инвариант закреплён самим типом.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub active: Option<ActiveSort>,
}

impl SortState {
    pub fn none() -> Self {
        Self { active: None }
    }

    pub fn by(column_id: &str, direction: SortDirection) -> Self {
        Self {
            active: Some(ActiveSort {
                column_id: column_id.to_string(),
                direction,
            }),
        }
    }

    /// Направление сортировки указанной колонки, если она активна.
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }
}
