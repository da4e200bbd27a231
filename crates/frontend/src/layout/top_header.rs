//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the product strapline and the New Chat
//! action.

use crate::layout::global_context::SessionContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let is_sidebar_visible = move || ctx.sidebar_open.get();

    view! {
        <div
            class="top-header"
            style="display: flex; align-items: center; gap: 16px; padding: 12px 16px; background: #ededed; border-bottom: 1px solid #e5e7eb;"
        >
            <button
                class="top-header__icon-btn"
                style="background: none; border: none; cursor: pointer; color: #404040; padding: 4px;"
                on:click=toggle_sidebar
                title=move || {
                    if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                }
            >
                {icon("menu")}
            </button>

            <h1 style="flex: 1; margin: 0; font-size: 16px; font-weight: 500; color: #404040; text-align: center;">
                "Welcome to TimberGPT — Timber Queries & Visual Inspection Made Easy"
            </h1>

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| ctx.new_chat()
            >
                {icon("plus")}
                " New Chat"
            </Button>
        </div>
    }
}
