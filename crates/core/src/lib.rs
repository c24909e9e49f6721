//! Domain building blocks shared by the store layer and the HTTP server.

pub mod error;
pub mod keys;
pub mod render;
pub mod responses;
pub mod types;
