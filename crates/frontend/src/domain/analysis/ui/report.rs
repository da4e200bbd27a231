//! Analysis report: presence-keyed rendering of the two result payloads.
//!
//! Every optional field degrades independently to "N/A" (or is simply
//! omitted, for images and the boxplot block); absence of one never blocks
//! the others.

use contracts::domain::analysis::report::{
    BoxplotSummary, DefectAnalysisResult, RingCountAnalysisResult,
};
use leptos::prelude::*;

use crate::shared::format::{
    format_area, format_percent, format_point, join_counts, outliers_label, NA,
};

fn data_url(blob: &str) -> String {
    format!("data:image/jpeg;base64,{}", blob)
}

fn metric_card(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="background: #f9fafb; padding: 12px; border-radius: 6px;">
            <p style="margin: 0; font-size: 13px; color: #6b7280;">{label}</p>
            <p style="margin: 0; font-size: 17px; font-weight: 500; color: #111827;">{value}</p>
        </div>
    }
}

#[component]
pub fn AnalysisReport(
    defect: Option<DefectAnalysisResult>,
    rings: Option<RingCountAnalysisResult>,
) -> impl IntoView {
    if defect.is_none() && rings.is_none() {
        return view! {
            <div style="padding: 16px; text-align: center; color: #6b7280;">
                "Upload an image to get an analysis report."
            </div>
        }
        .into_any();
    }

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px; padding: 16px; background: #fff; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05);">
            {defect.map(|data| view! { <DefectSection data=data /> })}
            {rings.map(|data| view! { <RingCountSection data=data /> })}
        </div>
    }
    .into_any()
}

#[component]
fn DefectSection(data: DefectAnalysisResult) -> impl IntoView {
    view! {
        <div>
            <h2 style="margin: 0 0 12px; font-size: 17px; font-weight: 600; color: #1f2937;">
                "Timber Defect Analysis"
            </h2>
            <div style="display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 16px; margin-bottom: 16px;">
                {metric_card("Total Log Area:", format_area(data.total_log_area))}
                {metric_card("Defect Area:", format_area(data.defect_area))}
                {metric_card("Defect Ratio:", format_percent(data.defect_ratio))}
            </div>
            {data
                .image_blob
                .map(|blob| {
                    view! {
                        <div>
                            <h3 style="margin: 0 0 8px; font-size: 15px; font-weight: 500; color: #1f2937;">
                                "Annotated Image"
                            </h3>
                            <img
                                src=data_url(&blob)
                                alt="Annotated Log"
                                style="max-width: 100%; height: auto; border-radius: 6px; border: 1px solid #e5e7eb;"
                            />
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn RingCountSection(data: RingCountAnalysisResult) -> impl IntoView {
    let pith = data
        .pith_center
        .map(format_point)
        .unwrap_or_else(|| NA.to_string());
    let counts = data
        .ring_counts
        .as_deref()
        .map(join_counts)
        .unwrap_or_else(|| NA.to_string());
    let mean = data
        .mean_ring_count
        .map(|mean| mean.to_string())
        .unwrap_or_else(|| NA.to_string());

    let diagnostics = [
        ("Canny Edge Detection", data.img_canny),
        ("Polar Transformation", data.img_polar),
        ("Boxplot Visualization", data.img_boxplot),
    ];

    view! {
        <div>
            <h2 style="margin: 0 0 12px; font-size: 17px; font-weight: 600; color: #1f2937;">
                "Tree Ring Count Analysis"
            </h2>
            <div style="display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 16px; margin-bottom: 16px;">
                {metric_card("Pith Center:", pith)}
                {metric_card("Ring Counts:", counts)}
                {metric_card("Mean Ring Count:", mean)}
            </div>

            <div style="display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 16px; margin-top: 16px;">
                {diagnostics
                    .into_iter()
                    .filter_map(|(title, blob)| {
                        blob.map(|blob| {
                            view! {
                                <div style="display: flex; flex-direction: column; align-items: center; border: 1px solid #e5e7eb; border-radius: 6px; padding: 8px; background: #f9fafb;">
                                    <h3 style="margin: 0 0 8px; font-size: 13px; font-weight: 500; color: #1f2937; text-align: center;">
                                        {title}
                                    </h3>
                                    <img
                                        src=data_url(&blob)
                                        alt=title
                                        style="width: 100%; height: auto; border-radius: 6px; object-fit: contain;"
                                    />
                                </div>
                            }
                        })
                    })
                    .collect_view()}
            </div>

            {data.boxplot_summary.map(|summary| view! { <BoxplotSummaryBlock summary=summary /> })}
        </div>
    }
}

#[component]
fn BoxplotSummaryBlock(summary: BoxplotSummary) -> impl IntoView {
    let entries = [
        (
            "First Quartile (Q1):",
            summary.q1.to_string(),
            "25% of the data falls below this value.",
        ),
        (
            "Median (Q2):",
            summary.median.to_string(),
            "The middle value of the dataset.",
        ),
        (
            "Third Quartile (Q3):",
            summary.q3.to_string(),
            "75% of the data falls below this value.",
        ),
        (
            "Interquartile Range (IQR):",
            summary.iqr.to_string(),
            "The range between Q1 and Q3, representing the middle 50% of data.",
        ),
        (
            "Outliers:",
            outliers_label(&summary.outliers),
            "Data points significantly different from other observations.",
        ),
        (
            "Q1-Q3 Range:",
            format_point(summary.q1_q3_range),
            "The boundaries of the central box in a boxplot.",
        ),
    ];

    view! {
        <div style="margin-top: 16px; background: #f9fafb; padding: 16px; border-radius: 8px; border: 1px solid #e5e7eb;">
            <h3 style="margin: 0 0 12px; font-size: 15px; font-weight: 600; color: #1f2937;">
                "Statistical Summary of Ring Counts (Boxplot)"
            </h3>
            <div style="display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 12px; font-size: 14px;">
                {entries
                    .into_iter()
                    .map(|(label, value, caption)| {
                        view! {
                            <div>
                                <p style="margin: 0; font-weight: 500; color: #374151;">{label}</p>
                                <p style="margin: 0; color: #111827;">{value}</p>
                                <p style="margin: 0; font-size: 12px; color: #4b5563;">{caption}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
