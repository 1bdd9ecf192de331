//! Состояние сайдбара фильтров: независимая тройка
//! `{enabled, value, operator}` на каждое объявленное хостом поле.
//!
//! Сайдбар фильтр не исполняет — он только описывает намерение; карта
//! уходит хосту по Apply и по Reset (сброс — это тоже push, а не
//! локальная очистка формы).

use contracts::shared::grid::{
    FilterFieldDescriptor, FilterFieldState, FilterOperator, FilterQuery,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSidebarState {
    fields: Vec<(FilterFieldDescriptor, FilterFieldState)>,
}

impl FilterSidebarState {
    pub fn new(descriptors: Vec<FilterFieldDescriptor>) -> Self {
        Self {
            fields: descriptors
                .into_iter()
                .map(|d| (d, FilterFieldState::default()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[(FilterFieldDescriptor, FilterFieldState)] {
        &self.fields
    }

    pub fn state_of(&self, field_id: &str) -> Option<&FilterFieldState> {
        self.fields
            .iter()
            .find(|(d, _)| d.id == field_id)
            .map(|(_, s)| s)
    }

    fn state_mut(&mut self, field_id: &str) -> Option<&mut FilterFieldState> {
        self.fields
            .iter_mut()
            .find(|(d, _)| d.id == field_id)
            .map(|(_, s)| s)
    }

    /// Включает/выключает поле, сохраняя значение и оператор.
    pub fn toggle_field(&mut self, field_id: &str) {
        if let Some(state) = self.state_mut(field_id) {
            state.enabled = !state.enabled;
        }
    }

    pub fn set_value(&mut self, field_id: &str, value: String) {
        if let Some(state) = self.state_mut(field_id) {
            state.value = value;
        }
    }

    pub fn set_operator(&mut self, field_id: &str, operator: FilterOperator) {
        if let Some(state) = self.state_mut(field_id) {
            state.operator = operator;
        }
    }

    pub fn active_count(&self) -> usize {
        self.query().active_count()
    }

    /// Текущая полная карта фильтра (Apply отправляет её как есть,
    /// даже если не включено ни одно поле — это легальный «без фильтра»).
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            fields: self
                .fields
                .iter()
                .map(|(d, s)| (d.id.clone(), s.clone()))
                .collect(),
        }
    }

    /// Сбрасывает каждое поле в `{enabled: false, value: "", Contains}`
    /// и возвращает очищенную карту — вызывающий обязан немедленно
    /// отправить её хосту.
    pub fn reset(&mut self) -> FilterQuery {
        for (_, state) in &mut self.fields {
            *state = FilterFieldState::default();
        }
        self.query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> FilterSidebarState {
        FilterSidebarState::new(vec![
            FilterFieldDescriptor::text("name", "Наименование", "name"),
            FilterFieldDescriptor::text("city", "Город", "city"),
        ])
    }

    #[test]
    fn test_toggle_preserves_value_and_operator() {
        let mut state = sidebar();
        state.set_value("name", "иванов".into());
        state.set_operator("name", FilterOperator::StartsWith);
        state.toggle_field("name");
        state.toggle_field("name");

        let field = state.state_of("name").unwrap();
        assert!(!field.enabled);
        assert_eq!(field.value, "иванов");
        assert_eq!(field.operator, FilterOperator::StartsWith);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut state = sidebar();
        state.toggle_field("name");
        state.set_value("name", "x".into());
        state.set_operator("city", FilterOperator::EndsWith);

        let query = state.reset();
        for (_, field) in &query.fields {
            assert_eq!(
                field,
                &FilterFieldState {
                    enabled: false,
                    value: String::new(),
                    operator: FilterOperator::Contains,
                }
            );
        }
    }

    #[test]
    fn test_reset_returns_pushable_query_even_when_nothing_enabled() {
        let mut state = sidebar();
        let query = state.reset();
        assert_eq!(query.fields.len(), 2);
        assert_eq!(query.active_count(), 0);
    }

    #[test]
    fn test_unknown_field_id_is_noop() {
        let mut state = sidebar();
        state.toggle_field("missing");
        state.set_value("missing", "x".into());
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_active_count_ignores_enabled_but_empty() {
        let mut state = sidebar();
        state.toggle_field("name");
        assert_eq!(state.active_count(), 0);
        state.set_value("name", "ltd".into());
        assert_eq!(state.active_count(), 1);
    }
}
