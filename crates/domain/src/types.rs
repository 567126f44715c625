//! Device, room, and credential entities returned by the cloud service.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SmartBlindsError};

/// A single motorized blind as known to the cloud service.
///
/// Identity key for state merging is `encoded_mac` (string equality,
/// case-sensitive, no normalization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blind {
    /// User-assigned display name.
    pub name: String,

    /// Base64-encoded hardware MAC address; the unique device identifier.
    pub encoded_mac: String,

    /// Room the blind is assigned to, if any. A blind whose `room_id`
    /// matches no returned room still appears in the flat blind list.
    pub room_id: Option<String>,

    /// Base64-encoded BLE pairing passkey.
    pub encoded_passkey: String,
}

impl Blind {
    /// Decode the raw hardware MAC address bytes.
    pub fn mac_address(&self) -> Result<Vec<u8>> {
        BASE64.decode(&self.encoded_mac).map_err(|e| {
            SmartBlindsError::MalformedResponse(format!("invalid encoded MAC address: {e}"))
        })
    }

    /// Decode the raw passkey bytes.
    pub fn passkey(&self) -> Result<Vec<u8>> {
        BASE64.decode(&self.encoded_passkey).map_err(|e| {
            SmartBlindsError::MalformedResponse(format!("invalid encoded passkey: {e}"))
        })
    }
}

/// A user-defined grouping of blinds sharing default position presets.
///
/// A room exclusively owns its member blinds; the member list preserves the
/// order blinds appeared in the service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// User-assigned display name.
    pub name: String,

    /// Service-assigned room identifier.
    pub id: String,

    /// Default position applied when the room is opened.
    pub open_position: f64,

    /// Default position applied when the room is closed.
    pub close_position: f64,

    /// Blinds assigned to this room, in response order.
    pub blinds: Vec<Blind>,
}

/// Device-reported telemetry for one blind.
///
/// Transient: recomputed on every read or command call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindState {
    /// Reported position, nominally 0-100. Device-reported, not validated.
    pub position: i32,

    /// Received signal strength indicator.
    pub rssi: i32,

    /// Battery charge percentage.
    pub battery_level: i32,
}

/// Credential bundle issued by the identity provider.
///
/// Populated exactly once per login and used indefinitely; the client
/// performs no expiry tracking or automatic refresh. Provider-issued fields
/// beyond these are ignored on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Token type; must be the literal `bearer` for the credential to be
    /// usable.
    pub token_type: Option<String>,

    /// OpenID Connect ID token presented as the bearer credential.
    pub id_token: Option<String>,

    /// OAuth access token, unused by this client but retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Refresh token issued under the `offline_access` scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blind(encoded_mac: &str, encoded_passkey: &str) -> Blind {
        Blind {
            name: "Living Room West".to_string(),
            encoded_mac: encoded_mac.to_string(),
            room_id: Some("room-1".to_string()),
            encoded_passkey: encoded_passkey.to_string(),
        }
    }

    #[test]
    fn decodes_mac_address_and_passkey() {
        // "ABCDEF" / "secret" in standard base64
        let b = blind("QUJDREVG", "c2VjcmV0");
        assert_eq!(b.mac_address().unwrap(), b"ABCDEF");
        assert_eq!(b.passkey().unwrap(), b"secret");
    }

    #[test]
    fn invalid_base64_is_a_malformed_response() {
        let b = blind("not base64!", "c2VjcmV0");
        assert!(matches!(b.mac_address(), Err(SmartBlindsError::MalformedResponse(_))));
    }

    #[test]
    fn credential_deserializes_ignoring_extra_fields() {
        let raw = serde_json::json!({
            "token_type": "bearer",
            "id_token": "jwt",
            "access_token": "at",
            "expires_in": 36000,
            "custom_claim": true,
        });
        let credential: Credential = serde_json::from_value(raw).unwrap();
        assert_eq!(credential.token_type.as_deref(), Some("bearer"));
        assert_eq!(credential.id_token.as_deref(), Some("jwt"));
        assert!(credential.refresh_token.is_none());
    }
}
