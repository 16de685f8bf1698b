//! Summary cleanup

/// Marker stripped from every summary before it is printed
pub const SUMMARY_MARKER: &str = "J_";

/// Remove every literal occurrence of [`SUMMARY_MARKER`].
///
/// A single left-to-right pass over non-overlapping matches, so text that
/// only forms the marker after removal (e.g. `"JJ__"`) keeps one copy.
pub fn clean_summary(summary: &str) -> String {
    summary.replace(SUMMARY_MARKER, "")
}
