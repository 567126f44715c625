//! GraphQL transport: one HTTP POST per request, no retries.

use std::time::Duration;

use serde_json::{json, Value};
use smartblinds_domain::{Result, SmartBlindsError};
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Executes single GraphQL requests against a fixed endpoint.
///
/// Failures are surfaced, never retried: a non-2xx status becomes
/// [`SmartBlindsError::Transport`] carrying the status and body, and a
/// GraphQL-level `errors` array in an otherwise successful response becomes
/// [`SmartBlindsError::Graphql`].
pub struct GraphqlTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlTransport {
    /// Create a transport for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SmartBlindsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint: endpoint.into() })
    }

    /// Execute one query or mutation and return the parsed response body.
    ///
    /// The body is `{"query": ..., "variables": ...}` with `variables`
    /// serialized as `null` when absent, matching the service's wire shape.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
        auth_header: &str,
    ) -> Result<Value> {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", auth_header)
            .json(&body)
            .send()
            .await
            .map_err(|e| SmartBlindsError::Network(format!("GraphQL request failed: {e}")))?;

        let status = response.status();
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "received GraphQL response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(SmartBlindsError::Transport { status: status.as_u16(), body });
        }

        let payload: Value = response.json().await.map_err(|e| {
            SmartBlindsError::MalformedResponse(format!("response body is not JSON: {e}"))
        })?;

        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(Value::as_str)
                            .map_or_else(|| e.to_string(), str::to_string)
                    })
                    .collect();
                return Err(SmartBlindsError::Graphql(messages.join(", ")));
            }
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn posts_query_with_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/graphql"))
            .and(header("Authorization", "Bearer jwt"))
            .and(body_partial_json(json!({ "query": "query Q { field }" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "field": 1 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = GraphqlTransport::new(format!("{}/v1/graphql", server.uri())).unwrap();
        let response =
            transport.execute("query Q { field }", None, "Bearer jwt").await.expect("response");

        assert_eq!(response["data"]["field"], 1);
    }

    #[tokio::test]
    async fn null_variables_are_sent_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "variables": null })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = GraphqlTransport::new(server.uri()).unwrap();
        transport.execute("query Q { field }", None, "Bearer jwt").await.expect("response");
    }

    #[tokio::test]
    async fn non_success_status_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = GraphqlTransport::new(server.uri()).unwrap();
        let err =
            transport.execute("query Q { field }", None, "Bearer jwt").await.expect_err("fails");

        match err {
            SmartBlindsError::Transport { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn graphql_errors_on_http_200_are_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [
                    { "message": "unknown field" },
                    { "message": "unauthorized" },
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = GraphqlTransport::new(server.uri()).unwrap();
        let err =
            transport.execute("query Q { field }", None, "Bearer jwt").await.expect_err("fails");

        match err {
            SmartBlindsError::Graphql(message) => {
                assert_eq!(message, "unknown field, unauthorized");
            }
            other => panic!("expected GraphQL error, got {other:?}"),
        }
    }
}
