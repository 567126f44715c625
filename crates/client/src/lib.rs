//! Unofficial client for the MySmartBlinds cloud service.
//!
//! Authenticates a user against the service's Auth0 tenant, then issues
//! batched queries and mutations against the service's single GraphQL
//! endpoint to enumerate devices and rooms, read device telemetry, and
//! command position changes.
//!
//! The batch executor splits device lists into chunks of [`BATCH_SIZE`]
//! identifiers, issues one network call per chunk strictly in order, and
//! merges per-chunk results keyed by encoded MAC address. Any chunk failure
//! aborts the whole operation; callers receive either a complete merged
//! result or an error, never a partial one.
//!
//! # Example
//!
//! ```rust,no_run
//! use smartblinds_client::SmartBlindsClient;
//!
//! # async fn example() -> smartblinds_domain::Result<()> {
//! let client = SmartBlindsClient::new("user@example.com", "hunter2")?;
//! let (blinds, rooms) = client.get_blinds_and_rooms().await?;
//! let states = client.get_blinds_state(&blinds).await?;
//! client.set_blinds_position(&blinds, 100).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod auth;
pub mod batch;
mod client;
pub mod mapper;
pub mod queries;
pub mod transport;

pub use batch::BATCH_SIZE;
pub use client::SmartBlindsClient;
// Re-export the domain types callers work with directly
pub use smartblinds_domain::{
    AuthError, Blind, BlindState, ClientConfig, Credential, Result, Room, SmartBlindsError,
};
