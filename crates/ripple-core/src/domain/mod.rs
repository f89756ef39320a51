//! Domain entities - the core business objects.

mod post;
mod reaction;
mod user;

pub use post::{CreatorSummary, Post, PostWithCreator};
pub use reaction::PostReaction;
pub use user::User;
