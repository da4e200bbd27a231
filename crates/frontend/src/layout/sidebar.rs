//! Sidebar component with the two navigation actions.

use crate::layout::global_context::{ActiveView, SessionContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

const ITEM_STYLE: &str = "display: flex; align-items: center; gap: 12px; width: 100%; padding: 8px 12px; font-size: 14px; border: none; border-radius: 8px; cursor: pointer; text-align: left;";

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");

    let item_background = move |view: ActiveView| {
        if ctx.active_view.get() == view {
            "#f3f4f6"
        } else {
            "transparent"
        }
    };

    view! {
        <div class="app-sidebar__content" style="display: flex; flex-direction: column; height: 100%;">
            // Brand area
            <div style="padding: 24px 16px; text-align: center; font-weight: 700; font-size: 18px; color: #6fb110;">
                "TimberGPT"
            </div>

            // Navigation items
            <nav style="flex: 1; overflow-y: auto; padding: 0 16px;">
                <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 6px;">
                    <li>
                        <button
                            style=ITEM_STYLE
                            style:background=move || item_background(ActiveView::Chat)
                            on:click=move |_| ctx.new_chat()
                        >
                            {icon("plus")}
                            "New chat"
                        </button>
                    </li>
                    <li>
                        <button
                            style=ITEM_STYLE
                            style:background=move || item_background(ActiveView::ImageAnalysis)
                            on:click=move |_| ctx.show_image_analysis()
                        >
                            {icon("image")}
                            "Image Analysis"
                        </button>
                    </li>
                </ul>
            </nav>
        </div>
    }
}
