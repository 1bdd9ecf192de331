//! Чекбокс «выбрать все» в заголовке грида.
//!
//! Три визуальных состояния: unchecked, checked, indeterminate.
//! Indeterminate у `<input type="checkbox">` выставляется только через
//! DOM-свойство, поэтому здесь NodeRef + Effect.

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::grid::CheckboxTriState;

#[component]
pub fn GridHeaderCheckbox(
    /// Агрегированное состояние по видимым строкам.
    #[prop(into)]
    state: Signal<CheckboxTriState>,

    /// true — выбрать все видимые, false — снять всё.
    on_change: Callback<bool>,

    /// ARIA-подпись чекбокса.
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state.get() == CheckboxTriState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="grid__checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="grid__checkbox"
                aria-label=label
                prop:checked=move || state.get() == CheckboxTriState::Checked
                on:change=move |ev| {
                    // Берём checked из DOM, а не из state: браузер уже
                    // переключил элемент к моменту события.
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}
