//! Domain logic for the Sprout gardening platform.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! build on these types and predicates.

pub mod access;
pub mod care;
pub mod content;
pub mod error;
pub mod pagination;
pub mod plants;
pub mod roles;
pub mod types;
pub mod uploads;
