//! # SmartBlinds Domain
//!
//! Domain types and models for the MySmartBlinds client.
//!
//! This crate contains:
//! - Device and room entities (`Blind`, `Room`, `BlindState`)
//! - The credential bundle issued by the identity provider
//! - Error types and the `Result` alias
//! - Client configuration and service constants
//!
//! ## Architecture
//! - No dependencies on other smartblinds crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
