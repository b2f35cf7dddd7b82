use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use orderdesk_core::domain::query::value_objects::RawParams;

/// Extractor handing the raw query-parameter bag to list handlers.
/// Repeated keys are preserved as `Multiple` so the normalization layer
/// can reject ambiguous input instead of silently picking a value.
#[derive(Debug, Clone)]
pub struct RawParamsExtractor(pub RawParams);

impl<S> FromRequestParts<S> for RawParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(RawParamsExtractor(RawParams::from_pairs(pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::get};
    use axum_test::TestServer;
    use orderdesk_core::domain::query::value_objects::RawValue;

    async fn echo(RawParamsExtractor(raw): RawParamsExtractor) -> Json<Vec<String>> {
        let values = match raw.get("status") {
            RawValue::Absent => Vec::new(),
            RawValue::Single(value) => vec![value.clone()],
            RawValue::Multiple(values) => values.clone(),
        };
        Json(values)
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/echo", get(echo)))
    }

    #[tokio::test]
    async fn single_key_extracts_as_single() {
        let response = server().get("/echo?status=new").await;
        response.assert_json(&serde_json::json!(["new"]));
    }

    #[tokio::test]
    async fn repeated_key_extracts_as_multiple() {
        let response = server().get("/echo?status=a&status=b").await;
        response.assert_json(&serde_json::json!(["a", "b"]));
    }

    #[tokio::test]
    async fn url_encoding_is_decoded() {
        let response = server().get("/echo?status=on%20hold").await;
        response.assert_json(&serde_json::json!(["on hold"]));
    }
}
