//! Catalog domain module.
//!
//! Plain movie records keyed by a typed identity. No IO, no storage, no
//! validation of descriptive attributes.

pub mod movie;

pub use movie::{Movie, MovieId};
