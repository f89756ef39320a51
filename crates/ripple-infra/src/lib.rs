//! # Ripple Infrastructure
//!
//! Concrete implementations of the ports defined in `ripple-core`:
//! PostgreSQL repositories via SeaORM plus the system clock and UUID
//! id provider.

pub mod database;
pub mod provider;

pub use provider::{SystemClock, UuidV4Provider};
