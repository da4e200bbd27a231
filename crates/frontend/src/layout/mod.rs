pub mod global_context;
pub mod sidebar;
pub mod top_header;

use global_context::SessionContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div class="app-layout" style="display: flex; flex-direction: column; height: 100vh;">
            <TopHeader />

            <div class="app-body" style="display: flex; flex: 1; min-height: 0;">
                // Left sidebar - uses ctx.sidebar_open for visibility
                <div
                    data-zone="left"
                    class="app-sidebar"
                    style="width: 192px; background: #fff; border-right: 1px solid #e5e7eb; overflow-y: auto;"
                    style:display=move || if is_open() { "block" } else { "none" }
                >
                    {left()}
                </div>

                // Main content area
                <div class="app-main" style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                    {center()}
                </div>
            </div>
        </div>
    }
}
