//! Result payloads of the two image-analysis capabilities.
//!
//! Beyond the three defect metrics, every field is an explicit `Option`
//! deserialized leniently: a missing or malformed value becomes `None`
//! instead of failing the whole payload, and rendering keys off presence.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Accept the field if it parses, otherwise drop it to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Response of POST /api/v1/analyze
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefectAnalysisResult {
    pub total_log_area: f64,
    pub defect_area: f64,
    /// Percentage in 0..=100
    pub defect_ratio: f64,
    /// Base64-encoded annotated overlay image
    #[serde(default, deserialize_with = "lenient")]
    pub image_blob: Option<String>,
}

/// Response of POST /api/v1/ring-count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RingCountAnalysisResult {
    /// Detected pith center as (x, y)
    #[serde(default, deserialize_with = "lenient")]
    pub pith_center: Option<(f64, f64)>,
    /// Ring count per polar scan line
    #[serde(default, deserialize_with = "lenient")]
    pub ring_counts: Option<Vec<u32>>,
    #[serde(default, deserialize_with = "lenient")]
    pub mean_ring_count: Option<f64>,
    /// Base64-encoded diagnostic images
    #[serde(default, deserialize_with = "lenient")]
    pub img_canny: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub img_polar: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub img_boxplot: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub boxplot_summary: Option<BoxplotSummary>,
}

/// Five-number statistical descriptor of the ring-count distribution.
/// Field names follow the wire format of the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoxplotSummary {
    #[serde(rename = "Q1")]
    pub q1: f64,
    #[serde(rename = "Median")]
    pub median: f64,
    #[serde(rename = "Q3")]
    pub q3: f64,
    #[serde(rename = "IQR")]
    pub iqr: f64,
    #[serde(rename = "Outliers")]
    pub outliers: Vec<f64>,
    #[serde(rename = "Q1_Q3_range")]
    pub q1_q3_range: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defect_result_parses_with_and_without_blob() {
        let full: DefectAnalysisResult = serde_json::from_value(json!({
            "total_log_area": 100.0,
            "defect_area": 25.0,
            "defect_ratio": 25.0,
            "image_blob": "aGVsbG8="
        }))
        .unwrap();
        assert_eq!(full.defect_ratio, 25.0);
        assert_eq!(full.image_blob.as_deref(), Some("aGVsbG8="));

        let bare: DefectAnalysisResult = serde_json::from_value(json!({
            "total_log_area": 100,
            "defect_area": 25,
            "defect_ratio": 25
        }))
        .unwrap();
        assert!(bare.image_blob.is_none());
    }

    #[test]
    fn ring_result_parses_full_payload() {
        let result: RingCountAnalysisResult = serde_json::from_value(json!({
            "pith_center": [412, 388],
            "ring_counts": [12, 14, 13, 15],
            "mean_ring_count": 13.5,
            "img_canny": "Y2Fubnk=",
            "img_polar": "cG9sYXI=",
            "img_boxplot": "Ym94",
            "boxplot_summary": {
                "Q1": 12.75,
                "Median": 13.5,
                "Q3": 14.25,
                "IQR": 1.5,
                "Outliers": [],
                "Q1_Q3_range": [12, 15]
            }
        }))
        .unwrap();
        assert_eq!(result.pith_center, Some((412.0, 388.0)));
        assert_eq!(result.ring_counts.as_deref(), Some(&[12, 14, 13, 15][..]));
        let boxplot = result.boxplot_summary.unwrap();
        assert_eq!(boxplot.median, 13.5);
        assert_eq!(boxplot.q1_q3_range, (12.0, 15.0));
    }

    #[test]
    fn missing_boxplot_summary_is_none_without_failing() {
        let result: RingCountAnalysisResult = serde_json::from_value(json!({
            "pith_center": [10, 20],
            "ring_counts": [3],
            "mean_ring_count": 3.0
        }))
        .unwrap();
        assert!(result.boxplot_summary.is_none());
        assert_eq!(result.pith_center, Some((10.0, 20.0)));
    }

    #[test]
    fn malformed_fields_degrade_independently() {
        let result: RingCountAnalysisResult = serde_json::from_value(json!({
            "pith_center": "not-a-pair",
            "ring_counts": [7, 8],
            "mean_ring_count": "many",
            "boxplot_summary": { "Q1": "broken" }
        }))
        .unwrap();
        assert!(result.pith_center.is_none());
        assert!(result.mean_ring_count.is_none());
        assert!(result.boxplot_summary.is_none());
        assert_eq!(result.ring_counts.as_deref(), Some(&[7, 8][..]));
    }

    #[test]
    fn empty_object_parses_to_all_absent() {
        let result: RingCountAnalysisResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result, RingCountAnalysisResult::default());
    }
}
