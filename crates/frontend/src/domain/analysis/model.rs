//! Image analysis - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::analysis::report::{DefectAnalysisResult, RingCountAnalysisResult};

/// POST one image as multipart (field "file") and return the response body
async fn post_image(path: &str, file: &web_sys::File) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// Defect-analysis capability
pub async fn analyze_defect(file: &web_sys::File) -> Result<DefectAnalysisResult, String> {
    let text = post_image("/api/v1/analyze", file).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// Ring-count-analysis capability
pub async fn count_rings(file: &web_sys::File) -> Result<RingCountAnalysisResult, String> {
    let text = post_image("/api/v1/ring-count", file).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
