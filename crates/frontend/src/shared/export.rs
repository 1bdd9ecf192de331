//! Экспорт строк грида в CSV с запуском скачивания в браузере.
//!
//! Разделитель `;`, UTF-8 BOM (иначе Excel ломает кириллицу), значения
//! с разделителями/кавычками/переводами строк оборачиваются в кавычки.
//! Содержимое собирается чистой функцией, скачивание — отдельный шаг.

use contracts::shared::grid::ColumnDescriptor;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: char = ';';

/// Собирает CSV по видимым колонкам данных: заголовки — подписи колонок,
/// значения — `cell_text(строка, accessor)`.
pub fn build_csv<T>(
    rows: &[T],
    columns: &[ColumnDescriptor],
    cell_text: impl Fn(&T, &str) -> String,
) -> String {
    let data_columns: Vec<&ColumnDescriptor> = columns
        .iter()
        .filter(|c| !c.is_synthetic() && c.visible)
        .collect();

    let mut csv = String::from('\u{FEFF}');
    let headers: Vec<String> = data_columns
        .iter()
        .map(|c| escape_cell(&c.label))
        .collect();
    csv.push_str(&headers.join(&SEPARATOR.to_string()));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = data_columns
            .iter()
            .map(|c| escape_cell(&cell_text(row, &c.accessor)))
            .collect();
        csv.push_str(&cells.join(&SEPARATOR.to_string()));
        csv.push('\n');
    }
    csv
}

/// Экспортирует строки и инициирует скачивание файла.
pub fn export_csv<T>(
    rows: &[T],
    columns: &[ColumnDescriptor],
    cell_text: impl Fn(&T, &str) -> String,
    filename: &str,
) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let content = build_csv(rows, columns, cell_text);
    download_text_file(&content, filename)
}

fn escape_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn download_text_file(content: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("name", "Наименование", "name"),
            ColumnDescriptor::new("city", "Город", "city"),
        ]
    }

    #[test]
    fn test_build_csv_has_bom_and_headers() {
        let rows = vec![("Альфа", "Казань")];
        let csv = build_csv(&rows, &columns(), |row, accessor| match accessor {
            "name" => row.0.to_string(),
            _ => row.1.to_string(),
        });
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("Наименование;Город\n"));
        assert!(csv.contains("Альфа;Казань\n"));
    }

    #[test]
    fn test_escape_cell_quotes_separators_and_doubles_quotes() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv_skips_hidden_and_synthetic_columns() {
        let mut cols = columns();
        cols[1].visible = false;
        cols.push(ColumnDescriptor::new("select", "", ""));
        let rows = vec![("Альфа", "Казань")];
        let csv = build_csv(&rows, &cols, |row, _| row.0.to_string());
        assert!(!csv.contains("Город"));
        assert!(!csv.contains(';'));
    }
}
