//! Two-image picker with previews and submission gating.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::domain::analysis::selection::{role_label, SelectedPair};
use crate::layout::global_context::SessionContext;
use crate::shared::icons::icon;

const OVER_SELECTION_NOTICE: &str = "Please select a maximum of two images.";

/// One picked file with its live preview object URL
#[derive(Clone, PartialEq)]
struct PickedImage {
    file: web_sys::File,
    name: String,
    preview_url: String,
}

impl PickedImage {
    fn new(file: web_sys::File) -> Self {
        let name = file.name();
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
        Self {
            file,
            name,
            preview_url,
        }
    }

    fn revoke_preview(&self) {
        let _ = web_sys::Url::revoke_object_url(&self.preview_url);
    }
}

#[component]
pub fn ImageUploadForm() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext not found");
    let selection = RwSignal::new(SelectedPair::<PickedImage>::new());
    let notice = RwSignal::new(Option::<String>::None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_files_picked = move |ev: web_sys::Event| {
        let input: HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        let mut picked = Vec::new();
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    picked.push(PickedImage::new(file));
                }
            }
        }

        let mut rejected = None;
        selection.update(|sel| {
            for old in sel.clear() {
                old.revoke_preview();
            }
            if let Err(batch) = sel.replace(picked) {
                rejected = Some(batch);
            }
        });

        if let Some(batch) = rejected {
            for img in &batch {
                img.revoke_preview();
            }
            input.set_value("");
            notice.set(Some(OVER_SELECTION_NOTICE.to_string()));
        } else {
            notice.set(None);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let remove_at = move |index: usize| {
        selection.update(|sel| {
            if let Some(img) = sel.remove(index) {
                img.revoke_preview();
            }
        });
    };

    let submit = move |_| {
        let pair = selection.with_untracked(|sel| {
            sel.as_pair()
                .map(|(defect, rings)| (defect.file.clone(), rings.file.clone()))
        });
        if let Some((defect, rings)) = pair {
            ctx.analyze_images(defect, rings);
        }
    };

    let can_submit = move || selection.with(|sel| sel.is_ready()) && !ctx.analyzing.get();

    view! {
        <div style="width: 100%; display: flex; flex-direction: column; gap: 16px;">
            <div style="background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); padding: 16px;">
                <h4 style="margin: 0 0 12px; text-align: center; font-size: 15px; font-weight: 600; color: #374151;">
                    "Upload Images for Analysis"
                </h4>

                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    style="display: none;"
                    node_ref=input_ref
                    on:change=on_files_picked
                />

                {move || {
                    notice
                        .get()
                        .map(|text| {
                            view! {
                                <p style="margin: 0 0 12px; text-align: center; font-size: 13px; color: #dc2626;">
                                    {text}
                                </p>
                            }
                        })
                }}

                {move || {
                    if selection.with(|sel| sel.is_empty()) {
                        view! {
                            <div
                                style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 96px; border: 2px dashed #d1d5db; border-radius: 8px; background: #f9fafb; cursor: pointer; color: #6b7280;"
                                on:click=open_picker
                            >
                                {icon("upload")}
                                <p style="margin: 4px 0 2px; font-size: 14px;">
                                    <span style="font-weight: 600;">"Click to upload"</span>
                                </p>
                                <p style="margin: 0; font-size: 12px;">"(Select two JPG, PNG files)"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div style="display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 16px; width: 100%;">
                                {selection
                                    .with(|sel| sel.items().to_vec())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, img)| {
                                        view! {
                                            <div style="position: relative; padding: 8px; border: 1px solid #e5e7eb; border-radius: 6px; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                                                <img
                                                    src=img.preview_url.clone()
                                                    alt=format!("Preview {}", index + 1)
                                                    style="max-width: 100%; height: auto; max-height: 128px; object-fit: contain; border-radius: 6px; margin-bottom: 8px;"
                                                />
                                                <p style="margin: 0; font-size: 12px; color: #374151; width: 100%; text-align: center; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                                    {img.name.clone()}
                                                </p>
                                                <p style="margin: 0; font-size: 12px; color: #6b7280; text-align: center;">
                                                    {role_label(index)}
                                                </p>
                                                <button
                                                    style="position: absolute; top: 4px; right: 4px; background: #ef4444; color: #fff; border: none; border-radius: 9999px; padding: 4px; cursor: pointer; display: flex;"
                                                    on:click=move |_| remove_at(index)
                                                >
                                                    {icon("close")}
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !can_submit())
                on_click=submit
            >
                {move || if ctx.analyzing.get() { "Analyzing..." } else { "Analyze Images" }}
            </Button>
        </div>
    }
}
