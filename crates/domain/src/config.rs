//! Client configuration for the identity provider and GraphQL endpoint.
//!
//! The defaults are the real MySmartBlinds service constants and must match
//! the live service exactly for interoperability. Tests point the endpoint
//! and domain at a mock server instead.

/// Identity-provider domain of the live service.
pub const AUTH0_DOMAIN: &str = "mysmartblinds.auth0.com";

/// OAuth client id registered for this client.
pub const AUTH0_CLIENT_ID: &str = "1d1c3vuqWtpUt1U577QX5gzCJZzm8WOB";

/// Auth0 database connection used for username/password login.
pub const AUTH0_CONNECTION: &str = "Username-Password-Authentication";

/// Device label reported to the identity provider at login.
pub const DEVICE_NAME: &str = "smartblinds_client";

/// Scopes requested at login. `offline_access` yields a refresh token.
pub const LOGIN_SCOPE: &str = "openid offline_access";

/// GraphQL endpoint of the live service.
pub const GRAPHQL_ENDPOINT: &str = "https://api.mysmartblinds.com/v1/graphql";

/// Endpoints and identity-provider parameters for a client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Identity-provider domain (e.g. `mysmartblinds.auth0.com`).
    pub auth0_domain: String,

    /// OAuth client id.
    pub auth0_client_id: String,

    /// Auth0 database connection name.
    pub auth0_connection: String,

    /// Device label sent with the login request.
    pub device: String,

    /// Space-separated scope string requested at login.
    pub scope: String,

    /// Full URL of the GraphQL endpoint.
    pub graphql_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth0_domain: AUTH0_DOMAIN.to_string(),
            auth0_client_id: AUTH0_CLIENT_ID.to_string(),
            auth0_connection: AUTH0_CONNECTION.to_string(),
            device: DEVICE_NAME.to_string(),
            scope: LOGIN_SCOPE.to_string(),
            graphql_endpoint: GRAPHQL_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_live_service() {
        let config = ClientConfig::default();
        assert_eq!(config.auth0_domain, "mysmartblinds.auth0.com");
        assert_eq!(config.auth0_client_id, "1d1c3vuqWtpUt1U577QX5gzCJZzm8WOB");
        assert_eq!(config.auth0_connection, "Username-Password-Authentication");
        assert_eq!(config.device, "smartblinds_client");
        assert_eq!(config.scope, "openid offline_access");
        assert_eq!(config.graphql_endpoint, "https://api.mysmartblinds.com/v1/graphql");
    }
}
