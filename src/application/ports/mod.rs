// src/application/ports/mod.rs
pub mod time;

// Injection sites take `Arc<ClockPort>` rather than spelling out the trait object.
pub type ClockPort = dyn time::Clock;
