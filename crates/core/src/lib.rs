//! Domain logic shared by the API and persistence layers.
//!
//! Everything here is pure and I/O-free so it can be exercised from unit
//! tests, the HTTP layer, and any future CLI tooling alike.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod pagination;
pub mod post;
pub mod slug;
pub mod types;
