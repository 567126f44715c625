//! Authentication: identity-provider gateway and in-memory credential store.
//!
//! The gateway obtains a credential bundle from Auth0; the store caches it
//! for the life of the process and renders the `Authorization` header value
//! for every GraphQL request.

mod gateway;
mod store;

pub use gateway::{Auth0Gateway, IdentityGateway, LoginRequest};
pub use store::CredentialStore;
