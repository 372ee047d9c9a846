//! Predict page: the application form and its result panel.

use leptos::prelude::*;
use predict::PredictionForm;

use crate::components::{application_form::ApplicationForm, result_panel::ResultPanel};

/// Owns the page's single form controller and shares it with both children.
#[component]
pub fn PredictPage() -> impl IntoView {
    let form = RwSignal::new(PredictionForm::new());
    provide_context(form);

    view! {
        <div class="predict-page">
            <div class="predict-card">
                <h1 class="predict-card__title">"Loan Approval Predictor"</h1>
                <ApplicationForm/>
                <ResultPanel/>
            </div>
        </div>
    }
}
