//! One rendered chat bubble.

use contracts::domain::chat::aggregate::{ChatMessage, MessageRole};
use leptos::prelude::*;
use thaw::Spinner;

use super::typewriter::Typewriter;
use crate::shared::markdown::render_markdown;

#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let content = message.content;

    // Loading placeholder shows a busy indicator; a fresh assistant reply
    // (no suggestion chips) types itself out; everything else renders
    // static rich text immediately.
    let body = if content.loading {
        view! { <Spinner /> }.into_any()
    } else if !is_user && content.suggestions.is_none() {
        view! { <Typewriter text=content.text.clone() /> }.into_any()
    } else {
        view! {
            <div class="markdown-body" inner_html=render_markdown(&content.text)></div>
        }
            .into_any()
    };

    let suggestions = (!is_user)
        .then_some(content.suggestions)
        .flatten()
        .filter(|chips| !chips.is_empty())
        .map(|chips| {
            view! {
                <div style="margin-top: 16px; display: flex; flex-wrap: wrap; gap: 8px;">
                    {chips
                        .into_iter()
                        .map(|chip| {
                            // Chip click behavior is not wired yet
                            view! {
                                <button style="padding: 8px 12px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; font-size: 14px; color: #374151; cursor: pointer;">
                                    {chip}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        });

    view! {
        <div style:display="flex" style:justify-content=if is_user { "flex-end" } else { "flex-start" }>
            <div style=format!(
                "max-width: 48rem; border-radius: 8px; padding: 12px 16px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); {}",
                if is_user {
                    "background: #faf5ff; color: #1f2937;"
                } else {
                    "background: #fff; border: 1px solid #f3f4f6;"
                },
            )>
                <div style="display: flex; align-items: flex-start;">
                    {(!is_user)
                        .then(|| {
                            view! {
                                <div style="flex-shrink: 0; margin-right: 12px;">
                                    <div style="width: 32px; height: 32px; border-radius: 4px; background: #6fb110; display: flex; align-items: center; justify-content: center;">
                                        <span style="color: #fff; font-size: 12px; font-weight: 700;">"AI"</span>
                                    </div>
                                </div>
                            }
                        })}

                    <div style="flex: 1; font-size: 14px;">{body} {suggestions}</div>

                    {is_user
                        .then(|| {
                            view! {
                                <div style="flex-shrink: 0; margin-left: 12px;">
                                    <div style="width: 32px; height: 32px; border-radius: 9999px; background: #4b5563; display: flex; align-items: center; justify-content: center;">
                                        <span style="color: #fff; font-size: 12px; font-weight: 700;">"U"</span>
                                    </div>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
