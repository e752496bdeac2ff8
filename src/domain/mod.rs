// src/domain/mod.rs
pub mod audit_history;
pub mod auditable;
pub mod errors;
