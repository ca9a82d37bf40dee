//! HTTP handler implementations, one module per API area.

pub mod blogs;
pub mod compose;
