//! # Ripple Shared
//!
//! Request/response shapes crossing the HTTP boundary, shared between the
//! server and any Rust clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
