use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use predict::{CreditHistory, Decision, EmploymentType, FormEdit, PredictionForm};
use serde_json::Value;

use super::*;

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `/predict` on an ephemeral port, answering every request with
/// `status` and `body`. Requests without a JSON content type are refused by
/// the `Json` extractor and never recorded.
async fn spawn_stub(status: StatusCode, body: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let app = Router::new().route(
        "/predict",
        post(move |axum::Json(payload): axum::Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().expect("lock").push(payload);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (format!("http://{addr}"), received)
}

fn sample_form() -> FormState {
    FormState {
        applicant_income: "50000".to_owned(),
        loan_amount: "150000".to_owned(),
        credit_history: CreditHistory::Good,
        employment_type: EmploymentType::Salaried,
    }
}

#[tokio::test]
async fn posts_form_as_json_and_parses_decision() {
    let (base, received) = spawn_stub(StatusCode::OK, r#"{"status":"Approved","confidence":0.87}"#).await;
    let transport = HttpTransport::new(&base);

    let resp = transport.predict(&sample_form()).await.expect("response");

    assert_eq!(
        resp,
        PredictionResponse::Decision { status: Decision::Approved, confidence: Some(0.87), reason: None }
    );
    let received = received.lock().expect("lock").clone();
    assert_eq!(
        received,
        vec![serde_json::json!({
            "applicant_income": "50000",
            "loan_amount": "150000",
            "credit_history": "good",
            "employment_type": "salaried",
        })]
    );
}

#[tokio::test]
async fn error_status_with_decision_body_is_still_a_response() {
    let (base, _) = spawn_stub(
        StatusCode::BAD_REQUEST,
        r#"{"status":"Rejected","reason":"Unrealistic loan-to-income ratio (60.00). Auto-rejected."}"#,
    )
    .await;

    let resp = HttpTransport::new(&base).predict(&sample_form()).await.expect("response");

    let PredictionResponse::Decision { status, reason, .. } = resp else {
        panic!("expected decision");
    };
    assert_eq!(status, Decision::Rejected);
    assert!(reason.is_some());
}

#[tokio::test]
async fn server_error_body_is_returned_as_payload() {
    let (base, _) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"model unavailable"}"#).await;

    let resp = HttpTransport::new(&base).predict(&sample_form()).await.expect("response");

    assert_eq!(resp.error(), Some("model unavailable"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (base, _) = spawn_stub(StatusCode::BAD_GATEWAY, "upstream unavailable").await;

    let err = HttpTransport::new(&base).predict(&sample_form()).await.expect_err("decode");

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = HttpTransport::new(&format!("http://{addr}")).predict(&sample_form()).await.expect_err("refused");

    assert!(matches!(err, TransportError::Request(_)));
}

#[tokio::test]
async fn controller_round_trip_through_stub() {
    let (base, received) = spawn_stub(StatusCode::OK, r#"{"status":"Approved","confidence":0.87}"#).await;
    let transport = HttpTransport::new(&base);
    let mut form = PredictionForm::new();
    form.update(FormEdit::ApplicantIncome("50000".to_owned()));
    form.update(FormEdit::LoanAmount("150000".to_owned()));

    let view = form.submit(&transport).await.expect("dispatched");

    let decision = view.decision().expect("decision");
    assert_eq!(decision.status.as_str(), "Approved");
    assert_eq!(decision.confidence.expect("confidence").label(), "87.0%");
    assert_eq!(received.lock().expect("lock").len(), 1);
}

#[tokio::test]
async fn controller_skips_network_on_invalid_form() {
    let (base, received) = spawn_stub(StatusCode::OK, r#"{"status":"Approved"}"#).await;
    let transport = HttpTransport::new(&base);
    let mut form = PredictionForm::new();
    form.update(FormEdit::ApplicantIncome("1000".to_owned()));
    form.update(FormEdit::LoanAmount("200000".to_owned()));

    assert!(form.submit(&transport).await.is_err());
    assert!(received.lock().expect("lock").is_empty());
}
