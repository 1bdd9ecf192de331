//! Быстрый поиск по списку: поле с debounce и кнопкой очистки.
//!
//! Значение уходит хосту через 300 мс после последнего ввода; фильтрацию
//! выполняет хост (клиентским срезом или перезапросом) — грид термин
//! не интерпретирует.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::grid::{grid_text, GridLocale};
use crate::shared::icons::icon;

/// Минимальная длина термина, при которой поиск считается активным.
pub const MIN_SEARCH_LEN: usize = 3;

const DEBOUNCE_MS: u32 = 300;

#[component]
pub fn GridSearchInput(
    /// Применённый хостом термин (для индикации активного фильтра).
    #[prop(into)]
    value: Signal<String>,

    /// Callback с новым термином (после debounce).
    #[prop(into)]
    on_change: Callback<String>,

    locale: GridLocale,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    // Поколение последнего ввода: устаревшие таймеры молча выбывают.
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || value.get().trim().len() >= MIN_SEARCH_LEN;

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="grid-search">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "grid-search__input grid-search__input--active"
                    } else {
                        "grid-search__input"
                    }
                }
                placeholder=grid_text(locale, "search_placeholder")
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    class="grid-search__clear"
                    on:click=clear_filter
                    title=grid_text(locale, "clear")
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

/// Подсветка вхождений термина в тексте ячейки (без учёта регистра).
/// Для коротких терминов возвращает текст как есть.
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let needle = term.trim().to_lowercase();
    if needle.len() < MIN_SEARCH_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let haystack = text.to_lowercase();
    if !haystack.contains(&needle) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut cursor = 0;
    while let Some(pos) = haystack[cursor..].find(&needle) {
        let start = cursor + pos;
        let end = start + needle.len();
        if start > cursor {
            parts.push(view! { <span>{text[cursor..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="grid-search__match">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        cursor = end;
    }
    if cursor < text.len() {
        parts.push(view! { <span>{text[cursor..].to_string()}</span> }.into_any());
    }
    view! { <>{parts}</> }.into_any()
}
