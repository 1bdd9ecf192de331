//! Ячейка заголовка колонки данных: грип перетаскивания, сортировочная
//! зона и ручка ресайза.
//!
//! Сортировка вешается на отдельную зону с подписью, а не на всю ячейку,
//! чтобы клик не конфликтовал с грипом и ручкой. Ручки ресайза нет у
//! последней видимой колонки.

use contracts::shared::grid::{ColumnDescriptor, SortState, TextDirection};
use leptos::prelude::*;
use thaw::*;

use crate::shared::grid::{grid_text, sort_class, sort_indicator, GridLocale};
use crate::shared::icons::icon;

#[component]
pub fn GridHeaderCell(
    /// id колонки; остальные атрибуты приходят реактивно через `column`.
    #[prop(into)]
    column_id: String,

    #[prop(into)]
    column: Signal<ColumnDescriptor>,

    #[prop(into)]
    sort: Signal<SortState>,

    /// Колонка-цель текущего перетаскивания (для подсветки).
    #[prop(into)]
    drag_over: Signal<Option<String>>,

    /// У последней видимой колонки нет правой ручки ресайза.
    #[prop(into)]
    last_visible: Signal<bool>,

    locale: GridLocale,

    on_sort_click: Callback<String>,
    on_drag_start: Callback<String>,
    on_drag_enter: Callback<String>,
    on_drop: Callback<String>,
    on_drag_end: Callback<()>,
    /// (id, −1 — влево, +1 — вправо) в визуальных координатах.
    on_key_move: Callback<(String, i8)>,
    /// (id, clientX) — начало жеста ресайза.
    on_resize_start: Callback<(String, f64)>,
    /// Двойной клик по ручке — вернуть исходную ширину.
    on_resize_reset: Callback<String>,
) -> impl IntoView {
    let id_for_sort = column_id.clone();
    let id_for_dragstart = column_id.clone();
    let id_for_dragover = column_id.clone();
    let id_for_drop = column_id.clone();
    let id_for_keys = column_id.clone();
    let id_for_resize = column_id.clone();
    let id_for_cell_class = column_id.clone();
    let id_for_sort_class = column_id.clone();
    let id_for_indicator = column_id.clone();

    let width_style = move || {
        let width = column.get().width;
        format!("width: {}px; min-width: {}px;", width, width)
    };

    let cell_class = Signal::derive(move || {
        if drag_over.get().as_deref() == Some(id_for_cell_class.as_str()) {
            "grid__header-cell grid__header-cell--drop-target".to_string()
        } else {
            "grid__header-cell".to_string()
        }
    });

    let handle_class = match locale.direction {
        TextDirection::Ltr => "grid__resize-handle",
        TextDirection::Rtl => "grid__resize-handle grid__resize-handle--rtl",
    };

    view! {
        <TableHeaderCell resizable=false class=cell_class attr:style=width_style>
            <div
                class="grid__header-inner"
                on:dragover=move |ev| {
                    // Без preventDefault браузер не разрешит drop.
                    ev.prevent_default();
                    on_drag_enter.run(id_for_dragover.clone());
                }
                on:drop=move |ev| {
                    ev.prevent_default();
                    on_drop.run(id_for_drop.clone());
                }
            >
                <span
                    class="grid__drag-grip"
                    draggable="true"
                    tabindex="0"
                    aria-label=grid_text(locale, "drag_column")
                    on:dragstart=move |ev| {
                        if let Some(dt) = ev.data_transfer() {
                            let _ = dt.set_data("text/plain", &id_for_dragstart);
                            dt.set_effect_allowed("move");
                        }
                        on_drag_start.run(id_for_dragstart.clone());
                    }
                    on:dragend=move |_| on_drag_end.run(())
                    on:keydown=move |ev| {
                        match ev.key().as_str() {
                            "ArrowLeft" => {
                                ev.prevent_default();
                                on_key_move.run((id_for_keys.clone(), -1));
                            }
                            "ArrowRight" => {
                                ev.prevent_default();
                                on_key_move.run((id_for_keys.clone(), 1));
                            }
                            _ => {}
                        }
                    }
                >
                    {icon("grip-vertical")}
                </span>

                {move || {
                    let col = column.get();
                    if col.sortable {
                        let id = id_for_sort.clone();
                        let id_cls = id_for_sort_class.clone();
                        let id_ind = id_for_indicator.clone();
                        view! {
                            <span
                                class="grid__sortable-label"
                                on:click=move |_| on_sort_click.run(id.clone())
                            >
                                {col.label.clone()}
                                <span class=move || sort.with(|s| sort_class(s, &id_cls))>
                                    {move || sort.with(|s| sort_indicator(s, &id_ind))}
                                </span>
                            </span>
                        }
                        .into_any()
                    } else {
                        view! { <span class="grid__plain-label">{col.label.clone()}</span> }
                            .into_any()
                    }
                }}
            </div>

            {move || (!last_visible.get()).then(|| {
                let id = id_for_resize.clone();
                let id_reset = id_for_resize.clone();
                view! {
                    <div
                        class=handle_class
                        aria-label=grid_text(locale, "resize_column")
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            on_resize_start.run((id.clone(), ev.client_x() as f64));
                        }
                        on:dblclick=move |ev| {
                            ev.stop_propagation();
                            on_resize_reset.run(id_reset.clone());
                        }
                    ></div>
                }
            })}
        </TableHeaderCell>
    }
}
