//! Ячейка действий строки.
//!
//! Набор кнопок выводится из того, какие callback-и передал хост:
//! есть `on_edit` — есть кнопка редактирования. Это проверка наличия
//! возможности, а не система прав.

use leptos::prelude::*;
use thaw::*;

use crate::shared::grid::{grid_text, GridLocale};
use crate::shared::icons::icon;

#[component]
pub fn GridActionsCell<T>(
    row: T,
    locale: GridLocale,
    #[prop(optional_no_strip)] on_view: Option<Callback<T>>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<T>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let row_for_view = row.clone();
    let row_for_edit = row.clone();
    let row_for_delete = row;

    view! {
        <TableCell class="grid__actions-column" on:click=|e| e.stop_propagation()>
            {on_view.map(|cb| {
                let row = row_for_view.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| cb.run(row.clone())
                        attr:title=grid_text(locale, "view")
                    >
                        {icon("eye")}
                    </Button>
                }
            })}
            {on_edit.map(|cb| {
                let row = row_for_edit.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| cb.run(row.clone())
                        attr:title=grid_text(locale, "edit")
                    >
                        {icon("edit")}
                    </Button>
                }
            })}
            {on_delete.map(|cb| {
                let row = row_for_delete.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| cb.run(row.clone())
                        attr:title=grid_text(locale, "delete")
                    >
                        {icon("trash")}
                    </Button>
                }
            })}
        </TableCell>
    }
}
