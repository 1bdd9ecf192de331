//! Локализация грида: словари собственных строк грида и слияние
//! локализованных подписей колонок в модель.
//!
//! Подписи и раскладка — независимые оси: смена локали меняет только
//! тексты, не трогая ширины, порядок и видимость колонок. Направление
//! (`ltr`/`rtl`) задаётся локалью отдельно от словаря и влияет на
//! атрибут `dir` таблицы и знак дельты ресайза.

use std::collections::HashMap;

use contracts::shared::grid::TextDirection;
use once_cell::sync::Lazy;

use super::column_model::ColumnModel;

/// Активная локаль грида.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLocale {
    pub code: &'static str,
    pub direction: TextDirection,
}

pub const LOCALE_RU: GridLocale = GridLocale {
    code: "ru",
    direction: TextDirection::Ltr,
};

pub const LOCALE_EN: GridLocale = GridLocale {
    code: "en",
    direction: TextDirection::Ltr,
};

static RU_TEXT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("loading", "Загрузка..."),
        ("empty", "Нет данных"),
        ("export", "Экспорт"),
        ("selected", "выбрано"),
        ("filters", "Фильтры"),
        ("apply", "Применить"),
        ("reset", "Сбросить"),
        ("search_placeholder", "Поиск (мин. 3 символа)..."),
        ("clear", "Очистить"),
        ("prev_page", "Предыдущая страница"),
        ("next_page", "Следующая страница"),
        ("view", "Просмотр"),
        ("edit", "Редактировать"),
        ("delete", "Удалить"),
        ("select_all", "Выбрать все"),
        ("select_row", "Выбрать строку"),
        ("drag_column", "Перетащить колонку"),
        ("resize_column", "Изменить ширину"),
        ("op_contains", "содержит"),
        ("op_equals", "равно"),
        ("op_starts_with", "начинается с"),
        ("op_ends_with", "заканчивается на"),
    ])
});

static EN_TEXT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("loading", "Loading..."),
        ("empty", "No data"),
        ("export", "Export"),
        ("selected", "selected"),
        ("filters", "Filters"),
        ("apply", "Apply"),
        ("reset", "Reset"),
        ("search_placeholder", "Search (min. 3 chars)..."),
        ("clear", "Clear"),
        ("prev_page", "Previous page"),
        ("next_page", "Next page"),
        ("view", "View"),
        ("edit", "Edit"),
        ("delete", "Delete"),
        ("select_all", "Select all"),
        ("select_row", "Select row"),
        ("drag_column", "Drag column"),
        ("resize_column", "Resize column"),
        ("op_contains", "contains"),
        ("op_equals", "equals"),
        ("op_starts_with", "starts with"),
        ("op_ends_with", "ends with"),
    ])
});

/// Строка грида в заданной локали. Для неизвестной локали — английский
/// словарь, для неизвестного ключа — сам ключ (чтобы дыра была видна).
pub fn grid_text(locale: GridLocale, key: &str) -> &'static str {
    let dict: &HashMap<&str, &str> = match locale.code {
        "ru" => &RU_TEXT,
        _ => &EN_TEXT,
    };
    if let Some(value) = dict.get(key).copied() {
        return value;
    }
    if let Some(value) = EN_TEXT.get(key).copied() {
        return value;
    }
    log::warn!("нет строки локализации для ключа '{}'", key);
    "?"
}

/// Вливает карту `id колонки → подпись` в модель. Меняются только
/// подписи; ширины, порядок и видимость остаются нетронутыми. Ключи
/// без соответствующей колонки игнорируются.
pub fn apply_labels(model: &mut ColumnModel, labels: &HashMap<String, String>) {
    for (id, label) in labels {
        model.set_label(id, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::grid::{ColumnDescriptor, GridCapabilities};

    #[test]
    fn test_text_falls_back_to_english() {
        assert_eq!(grid_text(LOCALE_RU, "empty"), "Нет данных");
        let unknown = GridLocale {
            code: "de",
            direction: TextDirection::Ltr,
        };
        assert_eq!(grid_text(unknown, "empty"), "No data");
    }

    #[test]
    fn test_apply_labels_touches_labels_only() {
        let mut model = ColumnModel::merge(
            vec![
                ColumnDescriptor::new("name", "Name", "name").with_width(220.0),
                ColumnDescriptor::new("city", "City", "city").hidden(),
            ],
            GridCapabilities::default(),
        );
        let before_layout: Vec<(String, f64, bool)> = model
            .columns()
            .iter()
            .map(|c| (c.id.clone(), c.width, c.visible))
            .collect();

        let labels = HashMap::from([
            ("name".to_string(), "Наименование".to_string()),
            ("missing".to_string(), "Призрак".to_string()),
        ]);
        apply_labels(&mut model, &labels);

        assert_eq!(model.get("name").unwrap().label, "Наименование");
        assert_eq!(model.get("city").unwrap().label, "City");
        let after_layout: Vec<(String, f64, bool)> = model
            .columns()
            .iter()
            .map(|c| (c.id.clone(), c.width, c.visible))
            .collect();
        assert_eq!(before_layout, after_layout);
    }
}
