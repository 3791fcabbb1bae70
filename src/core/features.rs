//! Feature labels are edited as one comma-separated line.

/// Split on `,`, trim each segment, drop empty ones. Order is preserved.
pub fn parse_features(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_features`] for pre-filling the edit form.
pub fn join_features(features: &[String]) -> String {
    features.join(", ")
}
