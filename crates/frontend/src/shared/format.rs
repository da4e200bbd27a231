//! Display formatting for analysis metrics.

/// Placeholder for absent or malformed optional fields
pub const NA: &str = "N/A";

/// Percentage with exactly two decimals, e.g. 25 -> "25.00%"
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Pixel-area metric, e.g. 14250 -> "14250 px²"
pub fn format_area(value: f64) -> String {
    format!("{} px²", value)
}

/// Coordinate pair as "[x, y]"
pub fn format_point(point: (f64, f64)) -> String {
    format!("[{}, {}]", point.0, point.1)
}

/// Ring counts joined with ", "
pub fn join_counts(counts: &[u32]) -> String {
    counts
        .iter()
        .map(|count| count.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outlier list joined with ", ", or "None" when there are none
pub fn outliers_label(outliers: &[f64]) -> String {
    if outliers.is_empty() {
        "None".to_string()
    } else {
        outliers
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_always_has_two_decimals() {
        assert_eq!(format_percent(25.0), "25.00%");
        assert_eq!(format_percent(25.456), "25.46%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn area_carries_the_pixel_unit() {
        assert_eq!(format_area(14250.0), "14250 px²");
        assert_eq!(format_area(0.5), "0.5 px²");
    }

    #[test]
    fn point_renders_as_bracket_pair() {
        assert_eq!(format_point((412.0, 388.0)), "[412, 388]");
        assert_eq!(format_point((0.5, 1.25)), "[0.5, 1.25]");
    }

    #[test]
    fn counts_join_with_comma_space() {
        assert_eq!(join_counts(&[12, 14, 13]), "12, 14, 13");
        assert_eq!(join_counts(&[7]), "7");
        assert_eq!(join_counts(&[]), "");
    }

    #[test]
    fn empty_outliers_say_none() {
        assert_eq!(outliers_label(&[]), "None");
        assert_eq!(outliers_label(&[3.0, 22.0]), "3, 22");
    }
}
