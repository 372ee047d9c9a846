//! Prediction service address.

/// Base address used when `PREDICT_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Normalize a configured base address, falling back to [`DEFAULT_API_URL`].
#[must_use]
pub fn resolve_base_url(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    base.trim_end_matches('/').to_owned()
}

/// Full URL of the predict endpoint under `base`.
#[must_use]
pub fn predict_url(base: &str) -> String {
    format!("{}/predict", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_base_uses_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
    }

    #[test]
    fn configured_base_is_trimmed() {
        assert_eq!(resolve_base_url(Some(" https://api.example.com/ ")), "https://api.example.com");
    }

    #[test]
    fn predict_url_appends_path_once() {
        assert_eq!(predict_url("http://127.0.0.1:5000"), "http://127.0.0.1:5000/predict");
        assert_eq!(predict_url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/predict");
    }
}
