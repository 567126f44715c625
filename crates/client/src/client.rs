//! Public client facade tying auth, transport, batching, and mapping together.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use smartblinds_domain::{Blind, BlindState, ClientConfig, Credential, Result, Room};
use tracing::debug;

use crate::auth::{Auth0Gateway, CredentialStore, IdentityGateway, LoginRequest};
use crate::batch::{for_each_batch, BATCH_SIZE};
use crate::mapper::{parse_states, parse_user_info};
use crate::queries::{GET_BLINDS_STATE, GET_USER_INFO, UPDATE_BLINDS_POSITION};
use crate::transport::GraphqlTransport;

/// Client for the MySmartBlinds cloud service.
///
/// Logs in lazily on the first operation and caches the credential for the
/// life of the process. Operations over many devices are chunked into
/// batches of [`BATCH_SIZE`] identifiers and issued strictly sequentially;
/// any batch failure aborts the whole operation with no partial result.
pub struct SmartBlindsClient {
    login_request: LoginRequest,
    gateway: Arc<dyn IdentityGateway>,
    credentials: CredentialStore,
    transport: GraphqlTransport,
}

impl SmartBlindsClient {
    /// Create a client against the live service.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(username, password, ClientConfig::default())
    }

    /// Create a client with explicit endpoints (e.g. a staging tenant).
    pub fn with_config(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let gateway = Arc::new(Auth0Gateway::new()?);
        Self::with_gateway(username, password, config, gateway)
    }

    /// Create a client with an injected identity gateway (for testing).
    pub fn with_gateway(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
        gateway: Arc<dyn IdentityGateway>,
    ) -> Result<Self> {
        let login_request = LoginRequest {
            domain: config.auth0_domain,
            client_id: config.auth0_client_id,
            username: username.into(),
            password: password.into(),
            connection: config.auth0_connection,
            device: config.device,
            scope: config.scope,
        };
        let transport = GraphqlTransport::new(config.graphql_endpoint)?;

        Ok(Self { login_request, gateway, credentials: CredentialStore::new(), transport })
    }

    /// Log in explicitly, replacing any cached credential.
    ///
    /// Operations log in lazily on first use; this is only needed to force a
    /// fresh credential.
    pub async fn login(&self) -> Result<Credential> {
        self.credentials.login(self.gateway.as_ref(), &self.login_request).await
    }

    /// Get all configured blinds and rooms.
    ///
    /// Entries the server flags `deleted` are filtered out. Every surviving
    /// blind appears in the flat list; blinds whose room survived also appear
    /// in that room's member list.
    pub async fn get_blinds_and_rooms(&self) -> Result<(Vec<Blind>, Vec<Room>)> {
        let response = self.execute(GET_USER_INFO, None).await?;
        parse_user_info(response)
    }

    /// Read current telemetry for the given blinds, keyed by encoded MAC.
    pub async fn get_blinds_state(&self, blinds: &[Blind]) -> Result<HashMap<String, BlindState>> {
        debug!(devices = blinds.len(), "reading blind state");
        let responses = for_each_batch(blinds, BATCH_SIZE, |batch| {
            let macs = encoded_macs(batch);
            self.execute(GET_BLINDS_STATE, Some(json!({ "blinds": macs })))
        })
        .await?;

        merge_states(responses, "blindsState")
    }

    /// Move the given blinds to `position` and return their reported state,
    /// keyed by encoded MAC.
    ///
    /// `position` is passed through uninterpreted; the service is the sole
    /// authority on the valid range.
    pub async fn set_blinds_position(
        &self,
        blinds: &[Blind],
        position: i32,
    ) -> Result<HashMap<String, BlindState>> {
        debug!(devices = blinds.len(), position, "setting blind position");
        let responses = for_each_batch(blinds, BATCH_SIZE, |batch| {
            let macs = encoded_macs(batch);
            self.execute(
                UPDATE_BLINDS_POSITION,
                Some(json!({ "blinds": macs, "position": position })),
            )
        })
        .await?;

        merge_states(responses, "updateBlindsPosition")
    }

    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value> {
        let auth_header =
            self.credentials.auth_header(self.gateway.as_ref(), &self.login_request).await?;
        self.transport.execute(query, variables, &auth_header).await
    }
}

fn encoded_macs(blinds: &[Blind]) -> Vec<String> {
    blinds.iter().map(|b| b.encoded_mac.clone()).collect()
}

/// Union of the per-chunk state maps. Device identifiers are globally
/// unique, so chunks never collide in correct operation; a duplicate key
/// across chunks resolves last-chunk-wins.
fn merge_states(responses: Vec<Value>, key: &str) -> Result<HashMap<String, BlindState>> {
    let mut states = HashMap::new();
    for response in responses {
        states.extend(parse_states(response, key)?);
    }
    Ok(states)
}
