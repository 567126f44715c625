//! Identity-provider gateway.
//!
//! The login protocol itself is an external collaborator: this module only
//! knows how to POST a username/password login to the Auth0 resource-owner
//! endpoint and hand back the credential bundle it returns.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use smartblinds_domain::{Credential, Result, SmartBlindsError};
use tracing::{debug, info};

const LOGIN_TIMEOUT_SECS: u64 = 30;

/// Parameters for one login attempt against the identity provider.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Identity-provider domain (e.g. `mysmartblinds.auth0.com`).
    pub domain: String,
    /// OAuth client id.
    pub client_id: String,
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Auth0 database connection name.
    pub connection: String,
    /// Device label reported to the provider.
    pub device: String,
    /// Space-separated scope string.
    pub scope: String,
}

/// Obtains a bearer credential bundle from the identity provider.
///
/// Treated as a black box by the rest of the client; errors from `login`
/// propagate to the caller unmodified.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Perform a username/password login and return the issued credential.
    async fn login(&self, request: &LoginRequest) -> Result<Credential>;
}

/// Production gateway speaking the Auth0 database-connection login protocol.
pub struct Auth0Gateway {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl Auth0Gateway {
    /// Create a gateway targeting `https://{domain}` of the login request.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a gateway with a fixed base URL instead of the request domain.
    ///
    /// Used in tests to point the login call at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::build(Some(base_url.into()))
    }

    fn build(base_url: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOGIN_TIMEOUT_SECS))
            .build()
            .map_err(|e| SmartBlindsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn login_url(&self, request: &LoginRequest) -> String {
        match &self.base_url {
            Some(base) => format!("{}/oauth/ro", base.trim_end_matches('/')),
            None => format!("https://{}/oauth/ro", request.domain),
        }
    }
}

#[async_trait]
impl IdentityGateway for Auth0Gateway {
    async fn login(&self, request: &LoginRequest) -> Result<Credential> {
        let url = self.login_url(request);
        debug!(%url, connection = %request.connection, "logging in to identity provider");

        let body = Auth0LoginBody {
            client_id: &request.client_id,
            username: &request.username,
            password: &request.password,
            connection: &request.connection,
            device: &request.device,
            scope: &request.scope,
            grant_type: "password",
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SmartBlindsError::Network(format!("login request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(SmartBlindsError::Transport { status: status.as_u16(), body });
        }

        let credential: Credential = response.json().await.map_err(|e| {
            SmartBlindsError::MalformedResponse(format!("invalid login response: {e}"))
        })?;

        info!(username = %request.username, "identity provider issued credential");
        Ok(credential)
    }
}

/// Auth0 legacy resource-owner login body.
#[derive(Serialize)]
struct Auth0LoginBody<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    connection: &'a str,
    device: &'a str,
    scope: &'a str,
    grant_type: &'a str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn login_request() -> LoginRequest {
        LoginRequest {
            domain: "mysmartblinds.auth0.com".to_string(),
            client_id: "test-client".to_string(),
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            connection: "Username-Password-Authentication".to_string(),
            device: "smartblinds_client".to_string(),
            scope: "openid offline_access".to_string(),
        }
    }

    #[test]
    fn login_url_targets_the_request_domain() {
        let gateway = Auth0Gateway::new().unwrap();
        let url = gateway.login_url(&login_request());
        assert_eq!(url, "https://mysmartblinds.auth0.com/oauth/ro");
    }

    #[tokio::test]
    async fn posts_credentials_and_parses_the_bundle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/ro"))
            .and(body_partial_json(json!({
                "client_id": "test-client",
                "username": "user@example.com",
                "connection": "Username-Password-Authentication",
                "device": "smartblinds_client",
                "scope": "openid offline_access",
                "grant_type": "password",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "bearer",
                "id_token": "test-id-token",
                "access_token": "test-access-token",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = Auth0Gateway::with_base_url(server.uri()).unwrap();
        let credential = gateway.login(&login_request()).await.expect("login");

        assert_eq!(credential.token_type.as_deref(), Some("bearer"));
        assert_eq!(credential.id_token.as_deref(), Some("test-id-token"));
    }

    #[tokio::test]
    async fn surfaces_provider_rejection_with_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/ro"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = Auth0Gateway::with_base_url(server.uri()).unwrap();
        let err = gateway.login(&login_request()).await.expect_err("should fail");

        match err {
            SmartBlindsError::Transport { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid credentials");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
