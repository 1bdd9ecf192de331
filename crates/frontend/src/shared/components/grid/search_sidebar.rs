//! Сайдбар фильтров: конструктор условий «поле + оператор + значение».
//!
//! Сайдбар описывает намерение и отдаёт карту фильтра хосту; применять
//! её (клиентским срезом или серверным запросом) — дело хоста. Reset —
//! это тоже push: очищенная карта немедленно уходит в `on_search`.

use contracts::shared::grid::{
    FilterFieldDescriptor, FilterFieldType, FilterOperator, FilterQuery,
};
use leptos::prelude::*;
use thaw::*;

use crate::shared::grid::{grid_text, FilterSidebarState, GridLocale};
use crate::shared::icons::icon;

const OPERATORS: [FilterOperator; 4] = [
    FilterOperator::Contains,
    FilterOperator::Equals,
    FilterOperator::StartsWith,
    FilterOperator::EndsWith,
];

fn operator_label(locale: GridLocale, op: FilterOperator) -> &'static str {
    match op {
        FilterOperator::Contains => grid_text(locale, "op_contains"),
        FilterOperator::Equals => grid_text(locale, "op_equals"),
        FilterOperator::StartsWith => grid_text(locale, "op_starts_with"),
        FilterOperator::EndsWith => grid_text(locale, "op_ends_with"),
    }
}

#[component]
pub fn SearchSidebar(
    /// Объявленные хостом фильтруемые поля.
    fields: Vec<FilterFieldDescriptor>,
    /// Полная карта фильтра по Apply и по Reset.
    on_search: Callback<FilterQuery>,
    locale: GridLocale,
) -> impl IntoView {
    let state = RwSignal::new(FilterSidebarState::new(fields.clone()));
    let is_expanded = RwSignal::new(true);

    let apply = move |_: leptos::ev::MouseEvent| {
        // Apply легален и без единого включённого поля: «без фильтра».
        on_search.run(state.with(|s| s.query()));
    };

    let reset = move |_: leptos::ev::MouseEvent| {
        let cleared = state.try_update(|s| s.reset()).unwrap_or_default();
        on_search.run(cleared);
    };

    let field_rows = fields
        .into_iter()
        .map(|descriptor| {
            let field_id = descriptor.id.clone();
            let id_for_toggle = field_id.clone();
            let id_for_checked = field_id.clone();
            let id_for_operator = field_id.clone();
            let id_for_op_value = field_id.clone();
            let id_for_value = field_id.clone();
            let id_for_input = field_id.clone();

            let value_input = match descriptor.field_type {
                FilterFieldType::Text => view! {
                    <input
                        type="text"
                        class="search-sidebar__value"
                        prop:value=move || {
                            state.with(|s| {
                                s.state_of(&id_for_input).map(|f| f.value.clone()).unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            state.update(|s| s.set_value(&id_for_value, event_target_value(&ev)));
                        }
                    />
                }
                .into_any(),
                FilterFieldType::Select => {
                    let options = descriptor.options.clone();
                    let id_for_select = field_id.clone();
                    view! {
                        <select
                            class="search-sidebar__value"
                            prop:value=move || {
                                state.with(|s| {
                                    s.state_of(&id_for_input).map(|f| f.value.clone()).unwrap_or_default()
                                })
                            }
                            on:change=move |ev| {
                                state.update(|s| s.set_value(&id_for_select, event_target_value(&ev)));
                            }
                        >
                            <option value="">"—"</option>
                            {options.into_iter().map(|(value, label)| view! {
                                <option value=value>{label}</option>
                            }).collect_view()}
                        </select>
                    }
                    .into_any()
                }
            };

            view! {
                <div class="search-sidebar__field">
                    <label class="search-sidebar__enable">
                        <input
                            type="checkbox"
                            prop:checked=move || {
                                state.with(|s| {
                                    s.state_of(&id_for_checked).map(|f| f.enabled).unwrap_or(false)
                                })
                            }
                            on:change=move |_| {
                                state.update(|s| s.toggle_field(&id_for_toggle));
                            }
                        />
                        <span>{descriptor.label.clone()}</span>
                    </label>
                    <select
                        class="search-sidebar__operator"
                        prop:value=move || {
                            state.with(|s| {
                                s.state_of(&id_for_op_value)
                                    .map(|f| f.operator.as_str().to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:change=move |ev| {
                            let op = FilterOperator::parse(&event_target_value(&ev));
                            state.update(|s| s.set_operator(&id_for_operator, op));
                        }
                    >
                        {OPERATORS.iter().map(|&op| view! {
                            <option value=op.as_str()>{operator_label(locale, op)}</option>
                        }).collect_view()}
                    </select>
                    {value_input}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="search-sidebar">
            <div
                class="search-sidebar__header"
                on:click=move |_| is_expanded.update(|e| *e = !*e)
            >
                {icon("filter")}
                <span class="search-sidebar__title">{grid_text(locale, "filters")}</span>
                {move || {
                    let count = state.with(|s| s.active_count());
                    (count > 0).then(|| view! {
                        <span class="badge badge--primary">{count}</span>
                    })
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "search-sidebar__body search-sidebar__body--expanded"
                } else {
                    "search-sidebar__body search-sidebar__body--collapsed"
                }
            }>
                {field_rows}

                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                        {grid_text(locale, "apply")}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=reset>
                        {grid_text(locale, "reset")}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
