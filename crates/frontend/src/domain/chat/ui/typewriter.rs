//! Character-by-character reveal for fresh assistant replies.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::markdown::render_markdown;

/// Milliseconds between revealed characters
const TICK_MS: u32 = 10;

/// First `n` characters of `text`, cut on char boundaries
fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Reveals `text` one character per tick, then swaps to the rich markdown
/// rendering of the whole string. A new text value means a new component
/// instance, so a reveal always restarts from empty. The tick loop stops on
/// its own once the component is disposed: `try_set` hands the value back
/// when the signal is gone.
#[component]
pub fn Typewriter(text: String) -> impl IntoView {
    let total = text.chars().count();
    let revealed = RwSignal::new(0usize);
    let text_stored = StoredValue::new(text);

    spawn_local(async move {
        for step in 1..=total {
            TimeoutFuture::new(TICK_MS).await;
            if revealed.try_set(step).is_some() {
                return;
            }
        }
    });

    view! {
        <div>
            {move || {
                let shown = revealed.get();
                let full = text_stored.get_value();
                if shown >= total {
                    // Reveal finished, switch to rich rendering
                    view! {
                        <div class="markdown-body" inner_html=render_markdown(&full)></div>
                    }
                        .into_any()
                } else {
                    view! {
                        <pre style="white-space: pre-wrap; margin: 0; font-family: inherit;">
                            {char_prefix(&full, shown)}
                        </pre>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(char_prefix("teak", 2), "te");
        assert_eq!(char_prefix("teak", 10), "teak");
        // Multi-byte characters are never split
        assert_eq!(char_prefix("木材は強い", 2), "木材");
    }

    #[test]
    fn prefix_of_zero_is_empty() {
        assert_eq!(char_prefix("anything", 0), "");
        assert_eq!(char_prefix("", 3), "");
    }
}
