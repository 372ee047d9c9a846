//! Loan application form.
//!
//! Inputs write straight into the shared controller on every keystroke;
//! validation only runs on submit. While a request is in flight the submit
//! button is disabled and the controller refuses further submits.

use leptos::prelude::*;
use predict::{CreditHistory, EmploymentType, FormEdit, PredictionForm};

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let form = expect_context::<RwSignal<PredictionForm>>();

    let busy = move || form.with(PredictionForm::is_loading);
    let message = move || form.with(|f| f.view().form_message());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(submission)) = form.try_update(PredictionForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use predict::PredictTransport;

            let transport = crate::net::api::ApiTransport::from_build_env();
            let outcome = transport.predict(&submission.form).await;
            form.update(|f| {
                f.finish_submit(submission.ticket, outcome);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    view! {
        <form class="predict-form" on:submit=on_submit>
            <label class="predict-form__field">
                <span class="predict-form__label">"Applicant Income"</span>
                <input
                    class="predict-input"
                    name="applicant_income"
                    type="number"
                    step="any"
                    required=true
                    prop:value=move || form.with(|f| f.form().applicant_income.clone())
                    on:input=move |ev| {
                        form.update(|f| f.update(FormEdit::ApplicantIncome(event_target_value(&ev))));
                    }
                />
            </label>
            <label class="predict-form__field">
                <span class="predict-form__label">"Loan Amount"</span>
                <input
                    class="predict-input"
                    name="loan_amount"
                    type="number"
                    step="any"
                    required=true
                    prop:value=move || form.with(|f| f.form().loan_amount.clone())
                    on:input=move |ev| {
                        form.update(|f| f.update(FormEdit::LoanAmount(event_target_value(&ev))));
                    }
                />
            </label>
            <label class="predict-form__field">
                <span class="predict-form__label">"Credit History"</span>
                <select
                    class="predict-input"
                    name="credit_history"
                    prop:value=move || form.with(|f| f.form().credit_history.as_str().to_owned())
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<CreditHistory>() {
                            form.update(|f| f.update(FormEdit::CreditHistory(value)));
                        }
                    }
                >
                    {CreditHistory::ALL
                        .into_iter()
                        .map(|v| view! { <option value=v.as_str()>{v.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="predict-form__field">
                <span class="predict-form__label">"Employment Type"</span>
                <select
                    class="predict-input"
                    name="employment_type"
                    prop:value=move || form.with(|f| f.form().employment_type.as_str().to_owned())
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<EmploymentType>() {
                            form.update(|f| f.update(FormEdit::EmploymentType(value)));
                        }
                    }
                >
                    {EmploymentType::ALL
                        .into_iter()
                        .map(|v| view! { <option value=v.as_str()>{v.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <Show when=move || message().is_some()>
                <p class="predict-form__error">{move || message().unwrap_or_default()}</p>
            </Show>

            <button class="predict-button" type="submit" disabled=busy>
                {move || if busy() { "Predicting..." } else { "Predict" }}
            </button>
        </form>
    }
}
