//! In-memory credential store with lazy login.

use smartblinds_domain::{AuthError, Credential, Result};
use tokio::sync::Mutex;
use tracing::debug;

use super::gateway::{IdentityGateway, LoginRequest};

/// The store's two states: no credential yet, or exactly one held credential.
#[derive(Debug, Default)]
enum CredentialState {
    #[default]
    Unauthenticated,
    Authenticated(Credential),
}

/// Holds the current bearer credential in memory.
///
/// Starts out `Unauthenticated`; the first `auth_header` call triggers a
/// login through the gateway and stores the returned credential
/// unconditionally. The stored credential is then used indefinitely: no
/// expiry tracking, no automatic refresh. Only an explicit [`login`] replaces
/// it.
///
/// The state sits behind a `tokio::sync::Mutex` held across the
/// check-then-login-then-read sequence, so concurrent callers trigger at most
/// one login.
///
/// [`login`]: CredentialStore::login
#[derive(Debug, Default)]
pub struct CredentialStore {
    state: Mutex<CredentialState>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform a login and replace any stored credential.
    ///
    /// The credential is stored unconditionally; its shape is only validated
    /// when an authorization header is requested.
    pub async fn login(
        &self,
        gateway: &dyn IdentityGateway,
        request: &LoginRequest,
    ) -> Result<Credential> {
        let credential = gateway.login(request).await?;
        *self.state.lock().await = CredentialState::Authenticated(credential.clone());
        Ok(credential)
    }

    /// Render the `Authorization` header value, logging in first if no
    /// credential is held.
    ///
    /// Validates on every call that the stored credential has
    /// `token_type == "bearer"` and carries an `id_token`; returns
    /// `"Bearer <id_token>"`.
    pub async fn auth_header(
        &self,
        gateway: &dyn IdentityGateway,
        request: &LoginRequest,
    ) -> Result<String> {
        let mut state = self.state.lock().await;

        if matches!(*state, CredentialState::Unauthenticated) {
            debug!("no credential held, performing initial login");
            let credential = gateway.login(request).await?;
            *state = CredentialState::Authenticated(credential);
        }

        match &*state {
            CredentialState::Authenticated(credential) => header_value(credential),
            // The match arm above just stored a credential.
            CredentialState::Unauthenticated => unreachable!("credential stored by this call"),
        }
    }
}

fn header_value(credential: &Credential) -> Result<String> {
    let token_type = credential.token_type.as_deref().unwrap_or_default();
    if token_type != "bearer" {
        return Err(AuthError::NotBearer { token_type: token_type.to_string() }.into());
    }

    let id_token = credential.id_token.as_deref().ok_or(AuthError::MissingIdToken)?;
    Ok(format!("Bearer {id_token}"))
}
