//! Выбор строк: множество ключей строк + трёхсостоянийный чекбокс
//! в заголовке.
//!
//! Ключ строки — значение `get_row_id` хоста, либо запасной индексный
//! ключ. Индексный ключ НЕ стабилен между страницами: выбор на несколько
//! страниц без `get_row_id` хосту недоступен (задокументированное
//! ограничение, не ошибка).

use std::collections::HashSet;

pub type RowKey = String;

/// Запасной ключ по индексу строки на текущей странице.
pub fn index_key(index: usize) -> RowKey {
    format!("#{}", index)
}

/// Визуальное состояние чекбокса в заголовке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxTriState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    selected: HashSet<RowKey>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    pub fn set(&mut self, key: RowKey, selected: bool) {
        if selected {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    /// Переключает членство ключа в множестве.
    pub fn toggle(&mut self, key: RowKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// «Выбрать всё» в пределах видимых строк: если выбраны все — снять
    /// всё целиком, иначе выбрать все видимые. Выбор постраничный: ключи
    /// за пределами текущей страницы метод не трогает, кроме полного
    /// сброса по второму тумблеру.
    pub fn toggle_all(&mut self, visible: &[RowKey]) {
        let all_selected =
            !visible.is_empty() && visible.iter().all(|k| self.selected.contains(k));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected.extend(visible.iter().cloned());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Состояние заголовочного чекбокса относительно видимых строк.
    pub fn header_state(&self, visible: &[RowKey]) -> CheckboxTriState {
        if visible.is_empty() {
            return CheckboxTriState::Unchecked;
        }
        let selected = visible.iter().filter(|k| self.selected.contains(*k)).count();
        if selected == 0 {
            CheckboxTriState::Unchecked
        } else if selected == visible.len() {
            CheckboxTriState::Checked
        } else {
            CheckboxTriState::Indeterminate
        }
    }

    /// Пересобирает выбранные объекты строк из текущих данных. Ключи,
    /// не нашедшие строки (остались от прежней страницы/набора), молча
    /// выпадают из результата — «не выбрано сейчас», а не ошибка.
    pub fn selected_rows<T: Clone>(&self, rows: &[T], keys: &[RowKey]) -> Vec<T> {
        let picked: Vec<T> = rows
            .iter()
            .zip(keys.iter())
            .filter(|(_, key)| self.selected.contains(*key))
            .map(|(row, _)| row.clone())
            .collect();
        let orphaned = self.selected.len().saturating_sub(picked.len());
        if orphaned > 0 {
            log::debug!("{} выбранных ключей не нашли строк на текущей странице", orphaned);
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<RowKey> {
        (0..n).map(index_key).collect()
    }

    #[test]
    fn test_toggle_is_idempotent_pairwise() {
        let mut ctl = SelectionController::new();
        ctl.toggle(index_key(3));
        assert!(ctl.is_selected("#3"));
        ctl.toggle(index_key(3));
        assert_eq!(ctl.count(), 0);
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        let visible = keys(5);
        let mut ctl = SelectionController::new();
        ctl.toggle(visible[1].clone());
        ctl.toggle(visible[3].clone());

        ctl.toggle_all(&visible);
        assert_eq!(ctl.count(), 5);

        ctl.toggle_all(&visible);
        assert_eq!(ctl.count(), 0);
    }

    #[test]
    fn test_header_state_three_values() {
        let visible = keys(3);
        let mut ctl = SelectionController::new();
        assert_eq!(ctl.header_state(&visible), CheckboxTriState::Unchecked);
        ctl.toggle(visible[0].clone());
        assert_eq!(ctl.header_state(&visible), CheckboxTriState::Indeterminate);
        ctl.toggle(visible[1].clone());
        ctl.toggle(visible[2].clone());
        assert_eq!(ctl.header_state(&visible), CheckboxTriState::Checked);
    }

    #[test]
    fn test_header_state_empty_rows_unchecked() {
        let ctl = SelectionController::new();
        assert_eq!(ctl.header_state(&[]), CheckboxTriState::Unchecked);
    }

    #[test]
    fn test_selected_rows_drops_orphaned_keys() {
        let mut ctl = SelectionController::new();
        ctl.toggle("a".to_string());
        ctl.toggle("stale".to_string());

        let rows = vec!["строка-a", "строка-b"];
        let keys = vec!["a".to_string(), "b".to_string()];
        assert_eq!(ctl.selected_rows(&rows, &keys), vec!["строка-a"]);
    }
}
