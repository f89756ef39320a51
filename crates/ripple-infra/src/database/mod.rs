//! Database connection management and repository implementations.

mod connections;
pub mod entity;
mod postgres_base;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, DbConn, connect};
pub use postgres_repo::{
    PostgresPostRepository, PostgresReactionRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;
