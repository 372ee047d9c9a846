//! Plain-text rendering of a prediction form's visible state.

use predict::{CONNECTIVITY_MESSAGE, Confidence, ViewState};

/// Width of the confidence bar in characters.
pub const BAR_CELLS: usize = 20;

pub fn render(view: &ViewState) -> String {
    match view {
        ViewState::Idle => String::new(),
        ViewState::Loading => "Predicting...".to_owned(),
        ViewState::Invalid(err) => err.to_string(),
        ViewState::Failed(_) => CONNECTIVITY_MESSAGE.to_owned(),
        ViewState::Result(_) => {
            if let Some(error) = view.server_error() {
                return error.to_owned();
            }
            let Some(decision) = view.decision() else {
                return String::new();
            };
            let mut lines = vec![decision.status.as_str().to_owned()];
            if let Some(reason) = decision.reason {
                lines.push(reason.to_owned());
            }
            if let Some(confidence) = decision.confidence {
                lines.push(format!("Confidence: {}", confidence.label()));
                lines.push(bar(confidence));
            }
            lines.join("\n")
        }
    }
}

/// `[#####---------------]` filled in proportion to the clamped confidence.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn bar(confidence: Confidence) -> String {
    let filled = ((confidence.bar_percent() / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
