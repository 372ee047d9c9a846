//! Result panel shown below the form once the service has answered.

use leptos::prelude::*;
use predict::{PredictionForm, ViewState};

use crate::util::decision_style;

/// Verdict with confidence bar, or the server-reported error string.
///
/// Hidden whenever the controller shows a validation or connectivity
/// message, and while a request is in flight.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let form = expect_context::<RwSignal<PredictionForm>>();
    let visible = move || form.with(|f| f.view().result().is_some());

    view! {
        <Show when=visible>
            <div class="result-panel">{move || form.with(|f| render_result(f.view()))}</div>
        </Show>
    }
}

fn render_result(state: &ViewState) -> Option<AnyView> {
    if let Some(error) = state.server_error() {
        let error = error.to_owned();
        return Some(view! { <div class="result-panel__error">{error}</div> }.into_any());
    }

    let decision = state.decision()?;
    let status = decision.status;
    let modifier = decision_style::modifier(status);
    let reason = decision.reason.map(str::to_owned);
    let confidence = decision.confidence.map(|c| {
        view! {
            <div class="result-panel__confidence">
                <div class="result-panel__confidence-label">{format!("Confidence: {}", c.label())}</div>
                <div class="result-panel__bar">
                    <div
                        class=format!("result-panel__bar-fill {modifier}")
                        style=format!("width: {}", c.bar_width())
                    ></div>
                </div>
            </div>
        }
    });

    Some(
        view! {
            <div class="result-panel__decision">
                <div class=format!("result-panel__icon {modifier}")>{decision_style::icon(status)}</div>
                <div class="result-panel__status">{status.as_str()}</div>
                {reason.map(|r| view! { <p class="result-panel__reason">{r}</p> })}
                {confidence}
            </div>
        }
        .into_any(),
    )
}
