//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod provider;
mod repository;

pub use provider::{Clock, IdProvider};
pub use repository::{BaseRepository, PostRepository, ReactionRepository, UserRepository};
