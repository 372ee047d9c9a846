//! Icon and colour modifier for a verdict.

use predict::Decision;

#[must_use]
pub fn icon(status: Decision) -> &'static str {
    match status {
        Decision::Approved => "✅",
        Decision::Rejected => "❌",
        Decision::HighRisk => "⚠️",
    }
}

/// CSS modifier class shared by the icon and the confidence bar.
#[must_use]
pub fn modifier(status: Decision) -> &'static str {
    match status {
        Decision::Approved => "result-panel--approved",
        Decision::Rejected => "result-panel--rejected",
        Decision::HighRisk => "result-panel--review",
    }
}

#[cfg(test)]
#[path = "decision_style_test.rs"]
mod tests;
