//! Composer for the chat view.

use crate::layout::global_context::SessionContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, Textarea};

#[component]
pub fn ChatInput() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let draft = RwSignal::new(String::new());

    let submit = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        ctx.send_message(text);
    };

    view! {
        <Flex style="gap: 8px; align-items: flex-end;">
            <div style="flex: 1;">
                <Textarea
                    value=draft
                    placeholder="Ask about timber and forestry... (Ctrl+Enter to send)"
                    attr:style="width: 100%; min-height: 48px; max-height: 160px; resize: vertical;"
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.ctrl_key() {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| submit()
            >
                {icon("send")}
                " Send"
            </Button>
        </Flex>
    }
}
