//! DataGrid — интерактивная таблица списочных экранов.
//!
//! Грид — чистый слой представления и жестов над данными хоста: строки
//! приходят уже отфильтрованными, отсортированными и порезанными на
//! страницы. Пользовательские жесты меняют локальное состояние
//! (раскладку колонок, выбор, цикл сортировки) и уходят хосту
//! callback-ами; решает, что с ними делать, хост.
//!
//! Выбор строк опирается на ключ строки из `get_row_id`. Без него ключом
//! становится индекс на странице — он не переживает смену страницы,
//! поэтому выбор на несколько страниц без `get_row_id` не работает.

use contracts::shared::grid::{
    ColumnDescriptor, GridCapabilities, PaginationState, SortDirection, SortState,
    TextDirection, ACTIONS_COLUMN_ID, SELECT_COLUMN_ID,
};
use leptos::prelude::*;
use thaw::*;

use std::collections::HashMap;

use crate::shared::dom::{defer, toggle_body_class, DocListener};
use crate::shared::grid::{
    advance_sort, apply_labels, grid_text, index_key, ColumnModel, GridLocale,
    ReorderController, ResizeController, SelectionController, LOCALE_RU,
};
use crate::shared::icons::icon;

use super::actions_cell::GridActionsCell;
use super::cell_checkbox::GridCellCheckbox;
use super::header_cell::GridHeaderCell;
use super::header_checkbox::GridHeaderCheckbox;
use super::pagination_strip::PaginationStrip;

/// Подписки активного жеста ресайза. Значение живёт от mousedown до
/// первого тика после завершения жеста; Drop снимает обработчики.
struct ResizeSession {
    _listeners: Vec<DocListener>,
}

#[component]
pub fn DataGrid<T>(
    /// Колонки хоста. Полная замена набора пересобирает модель.
    #[prop(into)]
    columns: Signal<Vec<ColumnDescriptor>>,

    /// Строки текущей страницы.
    #[prop(into)]
    rows: Signal<Vec<T>>,

    /// Текст ячейки: (строка, accessor) → значение.
    cell_text: Callback<(T, String), String>,

    /// Необязательный рендер ячейки поверх `cell_text` (подсветка
    /// совпадений, бейджи). Получает (строка, accessor).
    #[prop(optional)]
    cell_view: Option<Callback<(T, String), AnyView>>,

    #[prop(into, optional)]
    loading: Signal<bool>,

    /// Пагинация хоста; None (или total_items == 0) — контролы не рисуются.
    #[prop(optional, into)]
    pagination: MaybeProp<PaginationState>,

    /// Добавить колонку выбора строк.
    #[prop(optional)]
    selectable: bool,

    /// Стабильный ключ строки. Без него — индекс на странице.
    #[prop(optional)]
    get_row_id: Option<Callback<T, String>>,

    #[prop(optional)]
    locale: Option<GridLocale>,

    /// Локализованные подписи колонок (id → подпись). Меняют только
    /// тексты заголовков, не трогая ширины/порядок/видимость.
    #[prop(optional, into)]
    column_labels: MaybeProp<HashMap<String, String>>,

    #[prop(optional)]
    on_column_reorder: Option<Callback<Vec<ColumnDescriptor>>>,
    #[prop(optional)]
    on_column_resize: Option<Callback<(String, f64)>>,
    #[prop(optional)]
    on_sort: Option<Callback<(String, Option<SortDirection>)>>,
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<T>>>,
    /// Экспорт: выбранные строки, а если выбора нет — все видимые.
    #[prop(optional)]
    on_export: Option<Callback<Vec<T>>>,
    #[prop(optional)]
    on_view: Option<Callback<T>>,
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    #[prop(optional)]
    on_delete: Option<Callback<T>>,
    #[prop(optional)]
    on_page_change: Option<Callback<usize>>,
    #[prop(optional)]
    on_items_per_page_change: Option<Callback<usize>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let locale = locale.unwrap_or(LOCALE_RU);
    let caps = GridCapabilities {
        selectable,
        has_actions: on_view.is_some() || on_edit.is_some() || on_delete.is_some(),
    };

    let model = RwSignal::new(ColumnModel::merge(columns.get_untracked(), caps));
    let sort = RwSignal::new(SortState::none());
    let selection = RwSignal::new(SelectionController::new());
    let reorder = RwSignal::new(ReorderController::new());
    let resize = RwSignal::new(ResizeController::new());
    let resize_session = StoredValue::new_local(None::<ResizeSession>);
    // Гасит клик сортировки, прилетающий сразу после отпускания ручки.
    let resize_guard = RwSignal::new(false);

    // Полная замена набора колонок хостом пересобирает модель с нуля.
    Effect::new(move |prev: Option<Vec<ColumnDescriptor>>| {
        let cols = columns.get();
        if let Some(prev_cols) = prev {
            if prev_cols != cols {
                model.set(ColumnModel::merge(cols.clone(), caps));
            }
        }
        cols
    });

    // Смена словаря подписей вливается в модель, не трогая раскладку.
    Effect::new(move |_| {
        if let Some(labels) = column_labels.get() {
            model.update(|m| apply_labels(m, &labels));
        }
    });

    let row_keys = Signal::derive(move || {
        rows.get()
            .iter()
            .enumerate()
            .map(|(i, row)| match get_row_id {
                Some(cb) => cb.run(row.clone()),
                None => index_key(i),
            })
            .collect::<Vec<String>>()
    });

    let notify_selection = move || {
        if let Some(cb) = on_selection_change {
            let data = rows.get_untracked();
            let keys = row_keys.get_untracked();
            let selected = selection.with_untracked(|s| s.selected_rows(&data, &keys));
            cb.run(selected);
        }
    };

    let toggle_row = move |(key, checked): (String, bool)| {
        selection.update(|s| s.set(key, checked));
        notify_selection();
    };

    let toggle_all = move |_checked: bool| {
        let keys = row_keys.get_untracked();
        selection.update(|s| s.toggle_all(&keys));
        notify_selection();
    };

    let header_checkbox_state =
        Signal::derive(move || selection.with(|s| s.header_state(&row_keys.get())));

    let handle_sort_click = move |column_id: String| {
        if resize_guard.get_untracked() {
            return;
        }
        let next = model.with_untracked(|m| {
            sort.with_untracked(|s| advance_sort(m, s, &column_id))
        });
        if let Some(next) = next {
            let direction = next.direction_for(&column_id);
            sort.set(next);
            if let Some(cb) = on_sort {
                cb.run((column_id, direction));
            }
        }
    };

    // Перестановка: фаза 1 — синхронная мутация модели (мгновенный
    // отклик), фаза 2 — одно отложенное уведомление хоста.
    let notify_reorder = move || {
        if let Some(cb) = on_column_reorder {
            let cols = model.with_untracked(|m| m.host_columns());
            defer(move || cb.run(cols));
        }
    };

    let handle_drag_start = move |column_id: String| {
        model.with_untracked(|m| {
            reorder.update(|r| {
                r.begin(m, &column_id);
            })
        });
    };

    let handle_drag_enter = move |column_id: String| {
        model.with_untracked(|m| reorder.update(|r| r.drag_over(m, &column_id)));
    };

    let handle_drop = move |target_id: String| {
        let moved = model
            .try_update(|m| {
                reorder
                    .try_update(|r| r.drop_on(m, &target_id))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if moved {
            notify_reorder();
        }
    };

    let handle_drag_end = move |_: ()| {
        // Drop вне валидной цели: жест закончился, порядок не меняется.
        reorder.update(|r| r.cancel());
    };

    let handle_key_move = move |(column_id, delta): (String, i8)| {
        // Стрелки — в визуальных координатах: в RTL «влево» означает
        // логический шаг вправо.
        let delta = match locale.direction {
            TextDirection::Ltr => delta,
            TextDirection::Rtl => -delta,
        };
        let moved = model
            .try_update(|m| {
                if delta < 0 {
                    m.move_left(&column_id)
                } else {
                    m.move_right(&column_id)
                }
            })
            .unwrap_or(false);
        if moved {
            notify_reorder();
        }
    };

    let finish_resize = move || {
        let commit = resize.try_update(|r| r.end()).flatten();
        toggle_body_class("grid--resizing", false);
        if let Some(commit) = commit {
            resize_guard.set(true);
            if let Some(cb) = on_column_resize {
                defer(move || cb.run((commit.column_id.clone(), commit.width)));
            }
        }
        // Подписки снимаются на следующем тике: нельзя уронить Closure,
        // пока его обработчик ещё на стеке.
        defer(move || {
            resize_session.set_value(None);
            resize_guard.set(false);
        });
    };

    let handle_resize_reset = move |column_id: String| {
        let width = model
            .try_update(|m| m.reset_width(&column_id))
            .flatten();
        if let Some(width) = width {
            if let Some(cb) = on_column_resize {
                defer(move || cb.run((column_id, width)));
            }
        }
    };

    let handle_resize_start = move |(column_id, client_x): (String, f64)| {
        let began = model.with_untracked(|m| {
            resize
                .try_update(|r| r.begin(m, &column_id, client_x, locale.direction))
                .unwrap_or(false)
        });
        if !began {
            return;
        }
        toggle_body_class("grid--resizing", true);

        let mousemove = DocListener::mouse("mousemove", move |ev| {
            let tracked = resize
                .try_update(|r| r.track(ev.client_x() as f64))
                .flatten();
            if let Some((col, width)) = tracked {
                // Промежуточные ширины — только визуальное состояние:
                // внешний callback не трогаем до конца жеста.
                model.update(|m| {
                    m.apply_width(&col, width);
                });
            }
        });
        let mouseup = DocListener::mouse("mouseup", move |_| finish_resize());
        // Указатель покинул документ — жест завершаем принудительно.
        let mouseleave = DocListener::mouse("mouseleave", move |_| finish_resize());

        let listeners: Vec<DocListener> =
            [mousemove, mouseup, mouseleave].into_iter().flatten().collect();
        resize_session.set_value(Some(ResizeSession {
            _listeners: listeners,
        }));
    };

    let drag_over_signal =
        Signal::derive(move || reorder.with(|r| r.over().map(str::to_string)));

    let visible_ids = Memo::new(move |_| {
        model.with(|m| {
            m.visible_columns()
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<String>>()
        })
    });

    let visible_count = Signal::derive(move || model.with(|m| m.visible_count()));

    let export_toolbar = on_export.map(|cb| {
        view! {
            <div class="grid__toolbar">
                {move || {
                    let count = selection.with(|s| s.count());
                    (count > 0).then(|| view! {
                        <Badge>{count.to_string()} " " {grid_text(locale, "selected")}</Badge>
                    })
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        let data = rows.get_untracked();
                        let keys = row_keys.get_untracked();
                        let selected =
                            selection.with_untracked(|s| s.selected_rows(&data, &keys));
                        let payload = if selected.is_empty() { data } else { selected };
                        cb.run(payload);
                    }
                >
                    {icon("download")}
                    " "
                    {grid_text(locale, "export")}
                </Button>
            </div>
        }
    });

    view! {
        <div class="data-grid" dir=locale.direction.as_str()>
            {export_toolbar}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <For
                                each=move || visible_ids.get()
                                key=|id| id.clone()
                                children=move |id| {
                                    if id == SELECT_COLUMN_ID {
                                        view! {
                                            <GridHeaderCheckbox
                                                state=header_checkbox_state
                                                on_change=Callback::new(toggle_all)
                                                label=grid_text(locale, "select_all")
                                            />
                                        }
                                        .into_any()
                                    } else if id == ACTIONS_COLUMN_ID {
                                        view! {
                                            <TableHeaderCell resizable=false class="grid__actions-column">
                                                ""
                                            </TableHeaderCell>
                                        }
                                        .into_any()
                                    } else {
                                        let id_for_column = id.clone();
                                        let id_for_last = id.clone();
                                        let column = Signal::derive(move || {
                                            model.with(|m| {
                                                m.get(&id_for_column).cloned().unwrap_or_else(|| {
                                                    ColumnDescriptor::new("", "", "")
                                                })
                                            })
                                        });
                                        let last_visible = Signal::derive(move || {
                                            model.with(|m| m.is_last_visible(&id_for_last))
                                        });
                                        view! {
                                            <GridHeaderCell
                                                column_id=id
                                                column=column
                                                sort=sort
                                                drag_over=drag_over_signal
                                                last_visible=last_visible
                                                locale=locale
                                                on_sort_click=Callback::new(handle_sort_click)
                                                on_drag_start=Callback::new(handle_drag_start)
                                                on_drag_enter=Callback::new(handle_drag_enter)
                                                on_drop=Callback::new(handle_drop)
                                                on_drag_end=Callback::new(handle_drag_end)
                                                on_key_move=Callback::new(handle_key_move)
                                                on_resize_start=Callback::new(handle_resize_start)
                                                on_resize_reset=Callback::new(handle_resize_reset)
                                            />
                                        }
                                        .into_any()
                                    }
                                }
                            />
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let col_count = visible_count.get().to_string();
                            // Загрузка и «нет данных» взаимоисключающие и
                            // проверяются до отрисовки строк.
                            if loading.get() {
                                view! {
                                    <tr class="grid__placeholder-row">
                                        <td colspan=col_count.clone() class="grid__placeholder">
                                            {grid_text(locale, "loading")}
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else if rows.with(|r| r.is_empty()) {
                                view! {
                                    <tr class="grid__placeholder-row">
                                        <td colspan=col_count.clone() class="grid__placeholder grid__placeholder--empty">
                                            {grid_text(locale, "empty")}
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <For
                                        each=move || {
                                            let keys = row_keys.get();
                                            rows.get()
                                                .into_iter()
                                                .enumerate()
                                                .map(|(i, row)| {
                                                    let key = keys
                                                        .get(i)
                                                        .cloned()
                                                        .unwrap_or_else(|| index_key(i));
                                                    (key, i, row)
                                                })
                                                .collect::<Vec<_>>()
                                        }
                                        key=|(key, _, _)| key.clone()
                                        children=move |(key, index, row)| {
                                            // Детерминированная зебра по чётности индекса.
                                            let row_class = if index % 2 == 1 {
                                                "grid__row grid__row--alt"
                                            } else {
                                                "grid__row"
                                            };
                                            let key_for_checked = key.clone();
                                            let checked = Signal::derive(move || {
                                                selection.with(|s| s.is_selected(&key_for_checked))
                                            });
                                            view! {
                                                <TableRow class=row_class>
                                                    {move || {
                                                        let row = row.clone();
                                                        let key = key.clone();
                                                        model
                                                            .with(|m| m.visible_columns())
                                                            .into_iter()
                                                            .map(|col| {
                                                                if col.id == SELECT_COLUMN_ID {
                                                                    view! {
                                                                        <GridCellCheckbox
                                                                            row_key=key.clone()
                                                                            checked=checked
                                                                            on_change=Callback::new(toggle_row)
                                                                            label=grid_text(locale, "select_row")
                                                                        />
                                                                    }
                                                                    .into_any()
                                                                } else if col.id == ACTIONS_COLUMN_ID {
                                                                    view! {
                                                                        <GridActionsCell
                                                                            row=row.clone()
                                                                            locale=locale
                                                                            on_view=on_view
                                                                            on_edit=on_edit
                                                                            on_delete=on_delete
                                                                        />
                                                                    }
                                                                    .into_any()
                                                                } else {
                                                                    let content = match cell_view {
                                                                        Some(cb) => cb.run((
                                                                            row.clone(),
                                                                            col.accessor.clone(),
                                                                        )),
                                                                        None => {
                                                                            let text = cell_text.run((
                                                                                row.clone(),
                                                                                col.accessor.clone(),
                                                                            ));
                                                                            view! { <span>{text}</span> }
                                                                                .into_any()
                                                                        }
                                                                    };
                                                                    view! {
                                                                        <TableCell>
                                                                            <TableCellLayout truncate=true>
                                                                                {content}
                                                                            </TableCellLayout>
                                                                        </TableCell>
                                                                    }
                                                                    .into_any()
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </TableRow>
                                            }
                                        }
                                    />
                                }
                                .into_any()
                            }
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || {
                pagination
                    .get()
                    .filter(|p| p.total_items > 0)
                    .map(|snapshot| {
                        let pagination_signal = Signal::derive(move || {
                            pagination.get().unwrap_or(snapshot)
                        });
                        view! {
                            <PaginationStrip
                                pagination=pagination_signal
                                locale=locale
                                on_page_change=Callback::new(move |page| {
                                    if let Some(cb) = on_page_change {
                                        cb.run(page);
                                    }
                                })
                                on_items_per_page_change=Callback::new(move |size| {
                                    if let Some(cb) = on_items_per_page_change {
                                        cb.run(size);
                                    }
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
