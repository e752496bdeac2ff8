pub mod audit_stamper;

pub use audit_stamper::AuditStamper;
