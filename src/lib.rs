//! Shared domain base types.
//!
//! Entities in consuming services embed [`domain::auditable::AuditFields`]
//! (usually through [`domain::auditable::AuditableBase`]) to carry creator,
//! editor, timestamps, and a soft-delete flag, and record field-level changes
//! as [`domain::audit_history::AuditHistory`] entries.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AuditConfig;
pub use domain::audit_history::AuditHistory;
pub use domain::auditable::{AuditFields, Auditable, AuditableBase, HasAuditFields};
pub use domain::errors::{DomainError, DomainResult};
