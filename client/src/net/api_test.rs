use super::*;

#[test]
fn url_targets_predict_path() {
    let transport = ApiTransport::new("http://10.0.0.5:8080/");
    assert_eq!(transport.url(), "http://10.0.0.5:8080/predict");
}

#[test]
fn build_env_url_ends_with_predict() {
    let transport = ApiTransport::from_build_env();
    assert!(transport.url().ends_with("/predict"));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_render_never_sends() {
    let transport = ApiTransport::new(predict::DEFAULT_API_URL);
    let err = transport.predict(&FormState::default()).await.expect_err("no transport on server");
    assert!(matches!(err, TransportError::Request(_)));
}
