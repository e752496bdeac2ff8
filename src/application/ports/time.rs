// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps written into audit fields.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
