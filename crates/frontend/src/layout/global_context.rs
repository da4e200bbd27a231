//! Session controller: single owner of all mutable view state.
//!
//! Provided once via Leptos context from `App`; every mutation of the
//! conversation, the active view and the analysis result slots goes
//! through the operations here.

use contracts::domain::analysis::report::{DefectAnalysisResult, RingCountAnalysisResult};
use contracts::domain::chat::aggregate::Conversation;
use contracts::domain::chat::api::REQUEST_FAILED_FALLBACK;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::analysis::model::{analyze_defect, count_rings};
use crate::domain::chat::model::fetch_answer;

/// Raised once when at least one analysis call failed
const ANALYSIS_FAILED_ALERT: &str =
    "Error analyzing images. Please ensure valid images are provided and the server is running.";

/// The mutually exclusive UI mode currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Chat,
    ImageAnalysis,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub conversation: RwSignal<Conversation>,
    pub active_view: RwSignal<ActiveView>,
    pub sidebar_open: RwSignal<bool>,
    pub defect_result: RwSignal<Option<DefectAnalysisResult>>,
    pub ring_result: RwSignal<Option<RingCountAnalysisResult>>,
    pub analyzing: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            conversation: RwSignal::new(Conversation::with_greeting()),
            active_view: RwSignal::new(ActiveView::Chat),
            sidebar_open: RwSignal::new(true),
            defect_result: RwSignal::new(None),
            ring_result: RwSignal::new(None),
            analyzing: RwSignal::new(false),
        }
    }

    /// Discard the whole conversation and return to a fresh chat view
    pub fn new_chat(&self) {
        self.conversation.set(Conversation::with_greeting());
        self.active_view.set(ActiveView::Chat);
    }

    /// Switch to the analysis view. Stale results never survive the switch.
    pub fn show_image_analysis(&self) {
        self.active_view.set(ActiveView::ImageAnalysis);
        self.defect_result.set(None);
        self.ring_result.set(None);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Append the user's message plus a placeholder, then ask the
    /// chat-answer capability. Whitespace-only input is a no-op. Failures
    /// resolve the placeholder with a fixed fallback, never a crash.
    pub fn send_message(&self, text: String) {
        let mut placeholder = None;
        self.conversation
            .update(|conv| placeholder = conv.begin_exchange(&text));
        let Some(placeholder) = placeholder else {
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            let reply = match fetch_answer(&text).await {
                Ok(answer) => answer,
                Err(e) => {
                    log::error!("chat request failed: {e}");
                    REQUEST_FAILED_FALLBACK.to_string()
                }
            };
            ctx.conversation
                .update(|conv| conv.resolve_placeholder(placeholder, reply));
        });
    }

    /// Run the defect analysis on the first file and the ring count on the
    /// second. The calls go out sequentially with independent error capture:
    /// one failing call does not suppress the other's result. A single alert
    /// fires if anything failed, and `analyzing` clears in every outcome.
    pub fn analyze_images(&self, defect_file: web_sys::File, ring_file: web_sys::File) {
        let ctx = *self;
        ctx.analyzing.set(true);
        ctx.defect_result.set(None);
        ctx.ring_result.set(None);

        spawn_local(async move {
            let mut failed = false;

            match analyze_defect(&defect_file).await {
                Ok(result) => ctx.defect_result.set(Some(result)),
                Err(e) => {
                    log::error!("defect analysis failed: {e}");
                    failed = true;
                }
            }

            match count_rings(&ring_file).await {
                Ok(result) => ctx.ring_result.set(Some(result)),
                Err(e) => {
                    log::error!("ring-count analysis failed: {e}");
                    failed = true;
                }
            }

            if failed {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(ANALYSIS_FAILED_ALERT);
                }
            }
            ctx.analyzing.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chat_resets_to_single_greeting_and_chat_view() {
        let ctx = SessionContext::new();
        ctx.conversation
            .update(|conv| assert!(conv.begin_exchange("hello").is_some()));
        ctx.active_view.set(ActiveView::ImageAnalysis);

        ctx.new_chat();

        assert_eq!(ctx.conversation.get_untracked().len(), 1);
        assert_eq!(ctx.active_view.get_untracked(), ActiveView::Chat);
    }

    #[test]
    fn switching_to_analysis_clears_result_slots() {
        let ctx = SessionContext::new();
        ctx.ring_result
            .set(Some(Default::default()));

        ctx.show_image_analysis();

        assert_eq!(ctx.active_view.get_untracked(), ActiveView::ImageAnalysis);
        assert!(ctx.defect_result.get_untracked().is_none());
        assert!(ctx.ring_result.get_untracked().is_none());
    }
}
