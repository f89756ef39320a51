//! System implementations of the clock and id-provider ports.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ripple_core::ports::{Clock, IdProvider};

/// Wall-clock time from the operating system.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random version-4 UUIDs.
pub struct UuidV4Provider;

impl IdProvider for UuidV4Provider {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
