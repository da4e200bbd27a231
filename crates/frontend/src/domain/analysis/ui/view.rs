//! Image-analysis view: upload form, progress indicator, report.

use super::report::AnalysisReport;
use super::upload_form::ImageUploadForm;
use crate::layout::global_context::SessionContext;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn AnalysisView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");

    view! {
        <div style="flex: 1; height: 100%; overflow-y: auto; padding: 24px 16px; display: flex; flex-direction: column; gap: 24px; background: #f9fafb;">
            <ImageUploadForm />

            {move || {
                ctx.analyzing
                    .get()
                    .then(|| {
                        view! {
                            <div style="display: flex; justify-content: center; padding: 16px;">
                                <Spinner />
                            </div>
                        }
                    })
            }}

            {move || {
                let defect = ctx.defect_result.get();
                let rings = ctx.ring_result.get();
                let has_results = defect.is_some() || rings.is_some();
                (has_results && !ctx.analyzing.get())
                    .then(|| view! { <AnalysisReport defect=defect rings=rings /> })
            }}
        </div>
    }
}
