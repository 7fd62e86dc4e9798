//! Session extractors.
//!
//! - [`auth::AuthUser`] -- requires a valid Bearer token.
//! - [`auth::CurrentActor`] -- the actor if a token is present, anonymous otherwise.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role (403 otherwise).

pub mod auth;
pub mod rbac;
