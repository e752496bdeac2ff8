// src/domain/auditable/base.rs
use crate::domain::auditable::{capability::HasAuditFields, fields::AuditFields};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier plus audit fields, meant to be embedded in concrete entities.
///
/// The identifier type defaults to [`Uuid`]; entities keyed by integers or
/// strings pick their own (`AuditableBase<i64>`, `AuditableBase<String>`).
/// An unassigned identifier is `Id::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditableBase<Id = Uuid> {
    pub id: Id,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl<Id> AuditableBase<Id> {
    #[must_use]
    pub const fn new(id: Id, audit: AuditFields) -> Self {
        Self { id, audit }
    }

    #[must_use]
    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn set_id(&mut self, id: Id) {
        self.id = id;
    }
}

impl<Id> HasAuditFields for AuditableBase<Id> {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}
