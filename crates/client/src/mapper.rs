//! Response mapping: raw GraphQL payloads into domain entities.
//!
//! Parsing is purely structural: `response.data.<key>` must exist with the
//! expected shape, otherwise the whole operation fails with
//! [`SmartBlindsError::MalformedResponse`]. Missing structure is a protocol
//! mismatch, never a default-empty result.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use smartblinds_domain::{Blind, BlindState, Result, Room, SmartBlindsError};

/// Build the typed blind and room lists from a `GetUserInfo` response.
///
/// Entries flagged `deleted` by the server are dropped before entity
/// construction. Surviving blinds are grouped into their rooms by `roomId`;
/// a blind referencing a room that was filtered out (or no room at all)
/// stays in the flat blind list without a room association.
pub fn parse_user_info(response: Value) -> Result<(Vec<Blind>, Vec<Room>)> {
    let data = extract_data(response)?;
    let info: RawUserInfo = serde_json::from_value(data)
        .map_err(|e| SmartBlindsError::MalformedResponse(format!("invalid user info: {e}")))?;

    let mut rooms: Vec<Room> = Vec::new();
    let mut room_index: HashMap<String, usize> = HashMap::new();
    for room in info.user.rooms {
        if room.deleted {
            continue;
        }
        room_index.insert(room.id.clone(), rooms.len());
        rooms.push(Room {
            name: room.name,
            id: room.id,
            open_position: room.default_open_position,
            close_position: room.default_close_position,
            blinds: Vec::new(),
        });
    }

    let mut blinds: Vec<Blind> = Vec::new();
    for raw in info.user.blinds {
        if raw.deleted {
            continue;
        }
        let blind = Blind {
            name: raw.name,
            encoded_mac: raw.encoded_mac_address,
            room_id: raw.room_id,
            encoded_passkey: raw.encoded_passkey,
        };

        if let Some(index) = blind.room_id.as_ref().and_then(|id| room_index.get(id)) {
            rooms[*index].blinds.push(blind.clone());
        }
        blinds.push(blind);
    }

    Ok((blinds, rooms))
}

/// Build the per-device state map from a batched state or position response.
///
/// Extracts `response.data.<key>` as a list and keys each entry by its
/// `encodedMacAddress`.
pub fn parse_states(response: Value, key: &str) -> Result<HashMap<String, BlindState>> {
    let mut data = extract_data(response)?;
    let list = data
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| SmartBlindsError::MalformedResponse(format!("missing '{key}' in data")))?;

    let raw_states: Vec<RawBlindState> = serde_json::from_value(list)
        .map_err(|e| SmartBlindsError::MalformedResponse(format!("invalid '{key}' list: {e}")))?;

    Ok(raw_states
        .into_iter()
        .map(|raw| {
            (
                raw.encoded_mac_address,
                BlindState {
                    position: raw.position,
                    rssi: raw.rssi,
                    battery_level: raw.battery_level,
                },
            )
        })
        .collect())
}

fn extract_data(mut response: Value) -> Result<Value> {
    response
        .get_mut("data")
        .map(Value::take)
        .ok_or_else(|| SmartBlindsError::MalformedResponse("missing 'data' field".to_string()))
}

// =============================================================================
// Raw GraphQL payload shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawUserInfo {
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    rooms: Vec<RawRoom>,
    blinds: Vec<RawBlind>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoom {
    id: String,
    name: String,
    default_close_position: f64,
    default_open_position: f64,
    deleted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlind {
    name: String,
    encoded_mac_address: String,
    encoded_passkey: String,
    room_id: Option<String>,
    deleted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlindState {
    encoded_mac_address: String,
    position: i32,
    rssi: i32,
    battery_level: i32,
}
