//! GraphQL documents accepted by the service.
//!
//! Field sets are part of the external contract and must match the live
//! service exactly.

/// Fetch all rooms and blinds configured for the authenticated user.
pub const GET_USER_INFO: &str = r#"
    query GetUserInfo {
        user {
            rooms {
                id
                name
                defaultClosePosition
                defaultOpenPosition
                deleted
            }
            blinds {
                name
                encodedMacAddress
                encodedPasskey
                roomId
                deleted
            }
        }
    }
"#;

/// Read telemetry for a batch of blinds identified by encoded MAC address.
pub const GET_BLINDS_STATE: &str = r#"
    query GetBlindsState($blinds: [String]) {
        blindsState(encodedMacAddresses: $blinds) {
            encodedMacAddress
            position
            rssi
            batteryLevel
        }
    }
"#;

/// Command a batch of blinds to a position and read back their state.
pub const UPDATE_BLINDS_POSITION: &str = r#"
    mutation UpdateBlindsPosition($blinds: [String], $position: Int!) {
        updateBlindsPosition(encodedMacAddresses: $blinds, position: $position) {
            encodedMacAddress
            position
            rssi
            batteryLevel
        }
    }
"#;
