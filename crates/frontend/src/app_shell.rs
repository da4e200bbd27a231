//! Application shell - top-level layout composition.
//!
//! Composes the `Shell` zones: sidebar on the left, the active view
//! (conversation or image analysis) in the center.

use crate::domain::analysis::ui::AnalysisView;
use crate::domain::chat::ui::ChatView;
use crate::layout::global_context::{ActiveView, SessionContext};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active_view.get() {
                        ActiveView::Chat => view! { <ChatView /> }.into_any(),
                        ActiveView::ImageAnalysis => view! { <AnalysisView /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}
