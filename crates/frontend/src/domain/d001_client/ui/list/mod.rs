//! Список клиентов — эталонная обвязка DataGrid со стороны хоста.
//!
//! Грид отдаёт намерения (сортировка, фильтр, страница, раскладка),
//! хост владеет данными: здесь всё применяется клиентским срезом по
//! уже загруженному списку, раскладка колонок сохраняется в
//! localStorage и передаётся обратно в `columns` при следующем рендере.

mod state;

use std::cmp::Ordering;

use contracts::domain::d001_client::Client;
use contracts::shared::grid::{
    ColumnDescriptor, FilterFieldDescriptor, FilterQuery, SortDirection, SortState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::domain::d001_client::api;
use crate::shared::components::grid::{
    highlight_matches, DataGrid, GridSearchInput, SearchSidebar, MIN_SEARCH_LEN,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::export::export_csv;
use crate::shared::grid::LOCALE_RU;
use crate::shared::icons::icon;
use crate::shared::layout_storage;
use state::create_state;

const COLUMN_LAYOUT_KEY: &str = "d001_clients_column_layout";

/// Поля, по которым работает быстрый поиск.
const QUICK_SEARCH_FIELDS: [&str; 4] = ["name", "email", "phone", "city"];

fn client_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", "Наименование", "name")
            .with_min_width(160.0)
            .with_width(240.0),
        ColumnDescriptor::new("email", "Email", "email").with_width(200.0),
        ColumnDescriptor::new("phone", "Телефон", "phone")
            .with_width(160.0)
            .not_sortable(),
        ColumnDescriptor::new("city", "Город", "city").with_width(140.0),
        ColumnDescriptor::new("created_at", "Создан", "created_at").with_width(150.0),
    ]
}

fn filter_fields() -> Vec<FilterFieldDescriptor> {
    vec![
        FilterFieldDescriptor::text("name", "Наименование", "name"),
        FilterFieldDescriptor::text("city", "Город", "city"),
        FilterFieldDescriptor::select(
            "is_active",
            "Статус",
            "is_active",
            vec![
                ("активен".to_string(), "Активен".to_string()),
                ("архив".to_string(), "Архив".to_string()),
            ],
        ),
    ]
}

fn compare_clients(a: &Client, b: &Client, column_id: &str) -> Ordering {
    match column_id {
        "email" => opt_key(&a.email).cmp(&opt_key(&b.email)),
        "city" => opt_key(&a.city).cmp(&opt_key(&b.city)),
        "created_at" => a.created_at.cmp(&b.created_at),
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

fn opt_key(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_lowercase()
}

fn client_cell_text(client: &Client, accessor: &str) -> String {
    match accessor {
        "created_at" => format_datetime(&client.created_at),
        _ => client.field(accessor).unwrap_or_default(),
    }
}

#[component]
pub fn ClientsListPage() -> impl IntoView {
    let state = create_state();
    let all_clients: RwSignal<Vec<Client>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let columns: RwSignal<Vec<ColumnDescriptor>> = RwSignal::new(
        layout_storage::restore_layout(COLUMN_LAYOUT_KEY, client_columns()),
    );
    let selected_ids: RwSignal<Vec<Uuid>> = RwSignal::new(Vec::new());

    let refresh_view = move || {
        let mut data = all_clients.get_untracked();
        state.update(|s| {
            let term = s.quick_search.trim().to_lowercase();
            if term.len() >= MIN_SEARCH_LEN {
                data.retain(|c| {
                    QUICK_SEARCH_FIELDS.iter().any(|field| {
                        c.field(field)
                            .map(|v| v.to_lowercase().contains(&term))
                            .unwrap_or(false)
                    })
                });
            }

            let filter = s.filter.clone();
            data.retain(|c| filter.matches_row(|field| c.field(field)));

            if let Some(active) = s.sort.active.clone() {
                data.sort_by(|a, b| {
                    let ord = compare_clients(a, b, &active.column_id);
                    match active.direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }

            s.pagination.recalc(data.len());
            let (start, end) = s.pagination.slice_bounds(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(data) => {
                    all_clients.set(data);
                    state.update(|s| {
                        s.pagination.current_page = 1;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось загрузить клиентов: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // --- обвязка callback-ов грида ---

    let handle_reorder = Callback::new(move |cols: Vec<ColumnDescriptor>| {
        layout_storage::save_layout(COLUMN_LAYOUT_KEY, &cols);
        columns.set(cols);
    });

    let handle_resize = Callback::new(move |(column_id, width): (String, f64)| {
        columns.update(|cols| {
            if let Some(col) = cols.iter_mut().find(|c| c.id == column_id) {
                col.width = width;
            }
        });
        layout_storage::save_layout(COLUMN_LAYOUT_KEY, &columns.get_untracked());
    });

    let handle_sort = Callback::new(move |(column_id, direction): (String, Option<SortDirection>)| {
        state.update(|s| {
            s.sort = match direction {
                Some(d) => SortState::by(&column_id, d),
                None => SortState::none(),
            };
        });
        refresh_view();
    });

    let handle_selection = Callback::new(move |rows: Vec<Client>| {
        selected_ids.set(rows.iter().map(|c| c.id).collect());
    });

    let handle_search = Callback::new(move |query: FilterQuery| {
        state.update(|s| {
            s.filter = query;
            s.pagination.current_page = 1;
        });
        refresh_view();
    });

    let handle_quick_search = Callback::new(move |term: String| {
        state.update(|s| {
            s.quick_search = term;
            s.pagination.current_page = 1;
        });
        refresh_view();
    });

    let handle_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.pagination.current_page = page);
        refresh_view();
    });

    let handle_page_size = Callback::new(move |size: usize| {
        state.update(|s| s.pagination.set_items_per_page(size));
        refresh_view();
    });

    let handle_export = Callback::new(move |rows: Vec<Client>| {
        let filename = format!("clients_{}.csv", chrono::Local::now().format("%Y-%m-%d"));
        let cols = columns.get_untracked();
        if let Err(e) = export_csv(&rows, &cols, |c, accessor| client_cell_text(c, accessor), &filename) {
            set_error.set(Some(e));
        }
    });

    let handle_edit = Callback::new(move |client: Client| {
        // TODO: форма редактирования клиента (d001, details)
        log::info!("запрошено редактирование клиента {}", client.id);
    });

    let handle_delete = Callback::new(move |client: Client| {
        set_error.set(None);
        spawn_local(async move {
            match api::delete_client(client.id).await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    });

    let cell_view = Callback::new(move |(client, accessor): (Client, String)| {
        let text = client_cell_text(&client, &accessor);
        if QUICK_SEARCH_FIELDS.contains(&accessor.as_str()) {
            let term = state.with_untracked(|s| s.quick_search.clone());
            highlight_matches(&text, &term)
        } else {
            view! { <span>{text}</span> }.into_any()
        }
    });

    let rows_signal = Signal::derive(move || state.with(|s| s.items.clone()));
    let quick_search_signal = Signal::derive(move || state.with(|s| s.quick_search.clone()));
    let pagination_signal = Signal::derive(move || {
        let p = state.with(|s| s.pagination);
        (p.total_items > 0).then_some(p)
    });

    view! {
        <div class="page" id="d001-clients--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Клиенты"</h1>
                    <Badge>
                        {move || state.with(|s| s.pagination.total_items.to_string())}
                    </Badge>
                    {move || {
                        let count = selected_ids.with(|ids| ids.len());
                        (count > 0).then(|| view! {
                            <span class="badge badge--neutral">{format!("выбрано: {}", count)}</span>
                        })
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="page__list-controls">
                    <GridSearchInput
                        value=quick_search_signal
                        on_change=handle_quick_search
                        locale=LOCALE_RU
                    />
                </div>

                <div class="page__with-sidebar">
                    <SearchSidebar
                        fields=filter_fields()
                        on_search=handle_search
                        locale=LOCALE_RU
                    />

                    <DataGrid
                        columns=columns
                        rows=rows_signal
                        cell_text=Callback::new(|(c, accessor): (Client, String)| {
                            client_cell_text(&c, &accessor)
                        })
                        cell_view=cell_view
                        loading=loading
                        pagination=pagination_signal
                        selectable=true
                        get_row_id=Callback::new(|c: Client| c.id.to_string())
                        locale=LOCALE_RU
                        on_column_reorder=handle_reorder
                        on_column_resize=handle_resize
                        on_sort=handle_sort
                        on_selection_change=handle_selection
                        on_export=handle_export
                        on_edit=handle_edit
                        on_delete=handle_delete
                        on_page_change=handle_page_change
                        on_items_per_page_change=handle_page_size
                    />
                </div>
            </div>
        </div>
    }
}
