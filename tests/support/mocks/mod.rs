// tests/support/mocks/mod.rs
pub mod time;

pub use time::{FixedClock, fixed_now};
