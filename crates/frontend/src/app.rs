use leptos::prelude::*;

use crate::domain::d001_client::ui::list::ClientsListPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ClientsListPage />
    }
}
