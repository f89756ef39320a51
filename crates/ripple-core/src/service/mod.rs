//! Business services - validation and orchestration between HTTP and storage.

mod post;
mod user;

pub use post::{LikeOutcome, PostService};
pub use user::UserService;

#[cfg(test)]
mod tests;
