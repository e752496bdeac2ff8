// src/domain/auditable/capability.rs
use crate::domain::auditable::fields::AuditFields;
use chrono::{DateTime, Utc};

/// Capability of an entity that carries audit metadata.
///
/// This is a plain accessor contract: implementations store and return the
/// values as given. `edited_by` and `edited_date` are expected to be set
/// together; use [`AuditFields::mark_edited`] or the application stamper when
/// applying edits.
///
/// Entities that embed [`AuditFields`] get this trait for free by
/// implementing [`HasAuditFields`].
pub trait Auditable {
    fn created_by(&self) -> Option<&str>;
    fn set_created_by(&mut self, created_by: Option<String>);

    fn created_date(&self) -> DateTime<Utc>;
    fn set_created_date(&mut self, created_date: DateTime<Utc>);

    fn edited_by(&self) -> Option<&str>;
    fn set_edited_by(&mut self, edited_by: Option<String>);

    fn edited_date(&self) -> Option<DateTime<Utc>>;
    fn set_edited_date(&mut self, edited_date: Option<DateTime<Utc>>);

    fn is_deleted(&self) -> bool;
    fn set_is_deleted(&mut self, is_deleted: bool);
}

/// Points at the [`AuditFields`] an entity embeds.
pub trait HasAuditFields {
    fn audit(&self) -> &AuditFields;
    fn audit_mut(&mut self) -> &mut AuditFields;
}

impl<T> Auditable for T
where
    T: HasAuditFields + ?Sized,
{
    fn created_by(&self) -> Option<&str> {
        self.audit().created_by.as_deref()
    }

    fn set_created_by(&mut self, created_by: Option<String>) {
        self.audit_mut().created_by = created_by;
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.audit().created_date
    }

    fn set_created_date(&mut self, created_date: DateTime<Utc>) {
        self.audit_mut().created_date = created_date;
    }

    fn edited_by(&self) -> Option<&str> {
        self.audit().edited_by.as_deref()
    }

    fn set_edited_by(&mut self, edited_by: Option<String>) {
        self.audit_mut().edited_by = edited_by;
    }

    fn edited_date(&self) -> Option<DateTime<Utc>> {
        self.audit().edited_date
    }

    fn set_edited_date(&mut self, edited_date: Option<DateTime<Utc>>) {
        self.audit_mut().edited_date = edited_date;
    }

    fn is_deleted(&self) -> bool {
        self.audit().is_deleted
    }

    fn set_is_deleted(&mut self, is_deleted: bool) {
        self.audit_mut().is_deleted = is_deleted;
    }
}
