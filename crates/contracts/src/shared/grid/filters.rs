use serde::{Deserialize, Serialize};

/// Оператор сравнения значения поля.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[default]
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "startsWith")]
    StartsWith,
    #[serde(rename = "endsWith")]
    EndsWith,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "equals",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "equals" => FilterOperator::Equals,
            "startsWith" => FilterOperator::StartsWith,
            "endsWith" => FilterOperator::EndsWith,
            _ => FilterOperator::Contains,
        }
    }

    /// Проверяет значение ячейки против значения фильтра (без учёта регистра).
    pub fn matches(&self, cell: &str, needle: &str) -> bool {
        let cell = cell.to_lowercase();
        let needle = needle.to_lowercase();
        match self {
            FilterOperator::Contains => cell.contains(&needle),
            FilterOperator::Equals => cell == needle,
            FilterOperator::StartsWith => cell.starts_with(&needle),
            FilterOperator::EndsWith => cell.ends_with(&needle),
        }
    }
}

/// Тип поля фильтра: свободный текст или выбор из списка.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterFieldType {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "select")]
    Select,
}

/// Объявление фильтруемого поля, передаётся хостом в сайдбар.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFieldDescriptor {
    pub id: String,
    pub label: String,
    pub accessor: String,
    #[serde(rename = "type", default)]
    pub field_type: FilterFieldType,
    /// Пары (значение, подпись) для полей типа Select.
    #[serde(default)]
    pub options: Vec<(String, String)>,
}

impl FilterFieldDescriptor {
    pub fn text(id: &str, label: &str, accessor: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            accessor: accessor.to_string(),
            field_type: FilterFieldType::Text,
            options: Vec::new(),
        }
    }

    pub fn select(id: &str, label: &str, accessor: &str, options: Vec<(String, String)>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            accessor: accessor.to_string(),
            field_type: FilterFieldType::Select,
            options,
        }
    }
}

/// Состояние одного поля фильтра.
///
/// У выключенного поля значение и оператор сохраняются: повторное
/// включение возвращает прежний ввод.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFieldState {
    pub enabled: bool,
    pub value: String,
    #[serde(default)]
    pub operator: FilterOperator,
}

/// Полная карта фильтра, отправляемая хосту по Apply/Reset.
///
/// Порядок полей — порядок их объявления хостом. Карта без единого
/// включённого поля легальна и означает «без фильтра».
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub fields: Vec<(String, FilterFieldState)>,
}

impl FilterQuery {
    /// Пустая карта: все поля `{enabled: false, value: "", operator: Contains}`.
    pub fn cleared(field_ids: &[String]) -> Self {
        Self {
            fields: field_ids
                .iter()
                .map(|id| (id.clone(), FilterFieldState::default()))
                .collect(),
        }
    }

    /// Включённые поля с непустым значением.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &FilterFieldState)> {
        self.fields
            .iter()
            .filter(|(_, s)| s.enabled && !s.value.trim().is_empty())
            .map(|(id, s)| (id.as_str(), s))
    }

    pub fn active_count(&self) -> usize {
        self.enabled().count()
    }

    /// Проверяет строку против всех включённых полей (логическое И).
    /// `cell_of` возвращает значение поля строки по id поля фильтра.
    pub fn matches_row<F>(&self, cell_of: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        self.enabled().all(|(id, state)| {
            cell_of(id)
                .map(|cell| state.operator.matches(&cell, &state.value))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_matches() {
        assert!(FilterOperator::Contains.matches("Иванова и партнёры", "ПАРТ"));
        assert!(FilterOperator::Equals.matches("Москва", "москва"));
        assert!(FilterOperator::StartsWith.matches("Barcelona", "bar"));
        assert!(FilterOperator::EndsWith.matches("office@firm.com", "firm.com"));
        assert!(!FilterOperator::Equals.matches("Москва", "мос"));
    }

    #[test]
    fn test_cleared_query_means_no_filter() {
        let query = FilterQuery::cleared(&["name".to_string(), "city".to_string()]);
        assert_eq!(query.active_count(), 0);
        assert!(query.matches_row(|_| None));
    }

    #[test]
    fn test_matches_row_requires_all_enabled_fields() {
        let query = FilterQuery {
            fields: vec![
                (
                    "name".into(),
                    FilterFieldState {
                        enabled: true,
                        value: "ltd".into(),
                        operator: FilterOperator::Contains,
                    },
                ),
                (
                    "city".into(),
                    FilterFieldState {
                        enabled: true,
                        value: "Haifa".into(),
                        operator: FilterOperator::Equals,
                    },
                ),
                (
                    // Выключенное поле с сохранённым значением не участвует.
                    "email".into(),
                    FilterFieldState {
                        enabled: false,
                        value: "zzz".into(),
                        operator: FilterOperator::Contains,
                    },
                ),
            ],
        };

        let row = |field: &str| match field {
            "name" => Some("Coastal Ltd".to_string()),
            "city" => Some("haifa".to_string()),
            "email" => Some("info@coastal.example".to_string()),
            _ => None,
        };
        assert!(query.matches_row(row));

        let other = |field: &str| match field {
            "name" => Some("Coastal Ltd".to_string()),
            "city" => Some("Tel Aviv".to_string()),
            _ => None,
        };
        assert!(!query.matches_row(other));
    }
}
