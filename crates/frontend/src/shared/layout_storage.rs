//! Сохранение раскладки колонок в localStorage — опциональная обвязка
//! для хоста.
//!
//! Грид раскладку не сохраняет: хост ловит `on_column_reorder` /
//! `on_column_resize`, зовёт `save_layout`, а при следующем монтировании
//! применяет `load_layout` к своим колонкам до передачи их в грид.

use contracts::shared::grid::{ColumnDescriptor, ColumnLayoutSnapshot};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Снимает и сохраняет раскладку под ключом хоста.
pub fn save_layout(storage_key: &str, columns: &[ColumnDescriptor]) {
    let Some(storage) = local_storage() else {
        return;
    };
    let snapshot = ColumnLayoutSnapshot::capture(columns);
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            let _ = storage.set_item(storage_key, &json);
        }
        Err(e) => log::warn!("не удалось сериализовать раскладку: {}", e),
    }
}

/// Читает сохранённую раскладку; повреждённый JSON молча игнорируется.
pub fn load_layout(storage_key: &str) -> Option<ColumnLayoutSnapshot> {
    let storage = local_storage()?;
    let json = storage.get_item(storage_key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// Применяет сохранённую раскладку к колонкам хоста, если она есть.
pub fn restore_layout(
    storage_key: &str,
    columns: Vec<ColumnDescriptor>,
) -> Vec<ColumnDescriptor> {
    match load_layout(storage_key) {
        Some(snapshot) => snapshot.apply(columns),
        None => columns,
    }
}
