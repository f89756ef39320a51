//! SeaORM entities mirroring the relational schema.

pub mod post;
pub mod post_reaction;
pub mod user;
