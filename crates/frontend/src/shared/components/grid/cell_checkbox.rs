//! Чекбокс выбора одной строки.

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GridCellCheckbox(
    /// Ключ строки (row identity).
    #[prop(into)]
    row_key: String,

    /// Выбрана ли строка сейчас.
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback (ключ, новое состояние).
    on_change: Callback<(String, bool)>,

    /// ARIA-подпись.
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let key_for_change = row_key.clone();

    view! {
        <TableCell class="grid__checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="grid__checkbox"
                aria-label=label
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run((key_for_change.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
