//! Time and identifier providers.
//!
//! Kept behind traits so tests can inject deterministic values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh entity identifiers.
pub trait IdProvider: Send + Sync {
    fn generate(&self) -> Uuid;
}
