//! Полоса пагинации: чистое отображение + проброс событий.
//!
//! Состояние страниц принадлежит хосту; здесь только кнопки и селектор
//! размера страницы. Смена размера всегда сопровождается запросом первой
//! страницы в том же событии.

use contracts::shared::grid::{PaginationState, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

use crate::shared::grid::{grid_text, GridLocale};
use crate::shared::icons::icon;

/// Элемент оконного списка страниц.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Ограниченное окно номеров страниц: при `total > 5` — первая страница,
/// многоточие, окно до трёх страниц вокруг текущей, многоточие, последняя;
/// иначе все страницы подряд.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 5 {
        return (1..=total.max(1)).map(PageItem::Page).collect();
    }
    let lo = current.saturating_sub(1).max(2);
    let hi = (current + 1).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if lo > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in lo..=hi {
        items.push(PageItem::Page(page));
    }
    if hi < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

#[component]
pub fn PaginationStrip(
    #[prop(into)] pagination: Signal<PaginationState>,
    locale: GridLocale,
    on_page_change: Callback<usize>,
    on_items_per_page_change: Callback<usize>,
) -> impl IntoView {
    let change_size = move |value: String| {
        let size = value.parse().unwrap_or(PAGE_SIZE_OPTIONS[2]);
        on_items_per_page_change.run(size);
        // Глубокая страница при меньшем списке вышла бы за диапазон:
        // смена размера всегда возвращает на первую страницу.
        on_page_change.run(1);
    };

    view! {
        <div class="pagination-strip">
            <button
                class="pagination-strip__btn"
                on:click=move |_| {
                    let page = pagination.get().current_page;
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || pagination.get().current_page <= 1
                title=grid_text(locale, "prev_page")
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let state = pagination.get();
                page_window(state.current_page, state.total_pages)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Ellipsis => view! {
                            <span class="pagination-strip__ellipsis">"…"</span>
                        }
                        .into_any(),
                        PageItem::Page(page) => {
                            let is_current = page == state.current_page;
                            view! {
                                <button
                                    class=if is_current {
                                        "pagination-strip__btn pagination-strip__btn--current"
                                    } else {
                                        "pagination-strip__btn"
                                    }
                                    disabled=is_current
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}

            <button
                class="pagination-strip__btn"
                on:click=move |_| {
                    let state = pagination.get();
                    if state.current_page < state.total_pages {
                        on_page_change.run(state.current_page + 1);
                    }
                }
                disabled=move || {
                    let state = pagination.get();
                    state.current_page >= state.total_pages
                }
                title=grid_text(locale, "next_page")
            >
                {icon("chevron-right")}
            </button>

            <span class="pagination-strip__info">
                {move || {
                    let state = pagination.get();
                    format!("{} / {} ({})", state.current_page, state.total_pages, state.total_items)
                }}
            </span>

            <select
                class="pagination-strip__size"
                on:change=move |ev| change_size(event_target_value(&ev))
                prop:value=move || pagination.get().items_per_page.to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                    <option
                        value=size.to_string()
                        selected=move || pagination.get().items_per_page == size
                    >
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_five_or_fewer_pages_render_fully() {
        assert_eq!(
            page_window(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_window_centered_on_current() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_at_boundaries() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_no_leading_ellipsis_when_window_touches_start() {
        assert_eq!(
            page_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }
}
