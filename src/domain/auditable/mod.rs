pub mod base;
pub mod capability;
pub mod fields;

pub use base::AuditableBase;
pub use capability::{Auditable, HasAuditFields};
pub use fields::AuditFields;
