// src/domain/auditable/fields.rs
use crate::domain::auditable::capability::HasAuditFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The audit field set embedded by value in every auditable entity.
///
/// `Default` yields an unpopulated record: no creator, the epoch as creation
/// time, never edited, not deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub edited_by: Option<String>,
    pub edited_date: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl AuditFields {
    #[must_use]
    pub const fn new(created_by: Option<String>, created_date: DateTime<Utc>) -> Self {
        Self {
            created_by,
            created_date,
            edited_by: None,
            edited_date: None,
            is_deleted: false,
        }
    }

    /// Records an edit; editor and edit time are always written as a pair.
    pub fn mark_edited(&mut self, edited_by: impl Into<String>, at: DateTime<Utc>) {
        self.edited_by = Some(edited_by.into());
        self.edited_date = Some(at);
    }

    pub fn soft_delete(&mut self, deleted_by: impl Into<String>, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.mark_edited(deleted_by, at);
    }

    pub fn restore(&mut self, restored_by: impl Into<String>, at: DateTime<Utc>) {
        self.is_deleted = false;
        self.mark_edited(restored_by, at);
    }

    #[must_use]
    pub const fn is_edited(&self) -> bool {
        self.edited_date.is_some()
    }
}

impl HasAuditFields for AuditFields {
    fn audit(&self) -> &Self {
        self
    }

    fn audit_mut(&mut self) -> &mut Self {
        self
    }
}
