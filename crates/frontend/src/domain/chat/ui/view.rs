//! Chat view: message list plus composer.

use super::input::ChatInput;
use super::message::ChatMessageView;
use crate::layout::global_context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn ChatView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view whenever the list grows
    Effect::new(move |_| {
        let _count = ctx.conversation.with(|conv| conv.len());
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; background: #f9fafb;">
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; padding: 24px 16px; display: flex; flex-direction: column; gap: 12px;"
            >
                <For
                    each=move || ctx.conversation.with(|conv| conv.messages().to_vec())
                    key=|msg| msg.id.as_string()
                    let:msg
                >
                    <ChatMessageView message=msg />
                </For>
            </div>

            <div style="position: sticky; bottom: 0; width: 100%; padding: 12px 16px; background: #f9fafb;">
                <ChatInput />
            </div>
        </div>
    }
}
