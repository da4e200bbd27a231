use crate::app_shell::AppShell;
use crate::layout::global_context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the SessionContext store to the whole app via context.
    provide_context(SessionContext::new());

    view! {
        <AppShell />
    }
}
