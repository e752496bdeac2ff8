pub mod time;

pub use time::SystemClock;
