// src/domain/audit_history/entity.rs
use crate::domain::audit_history::value::{decode_value, encode_value};
use crate::domain::auditable::{AuditFields, AuditableBase, HasAuditFields};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// One recorded change to one property of one tracked entity.
///
/// The embedded `base` describes the history entry itself: its own id, who
/// logged the change and when. An update touching several properties is
/// recorded as one entry per property. Entries are append-only; the inherited
/// soft-delete flag is settable but not meant to be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditHistory {
    #[serde(flatten)]
    pub base: AuditableBase,
    /// Logical name of the changed entity, e.g. `"Product"`.
    pub entity_name: String,
    pub entity_id: Uuid,
    pub property_name: String,
    pub old_value: String,
    pub new_value: String,
}

impl AuditHistory {
    #[must_use]
    pub fn new(
        entity_name: impl Into<String>,
        entity_id: Uuid,
        property_name: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            base: AuditableBase::default(),
            entity_name: entity_name.into(),
            entity_id,
            property_name: property_name.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }

    /// Builds an entry whose values follow the JSON convention in
    /// [`super::value`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::errors::DomainError::Serialization`] when either value cannot be
    /// encoded as JSON.
    pub fn from_values<T>(
        entity_name: impl Into<String>,
        entity_id: Uuid,
        property_name: impl Into<String>,
        old_value: &T,
        new_value: &T,
    ) -> DomainResult<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::new(
            entity_name,
            entity_id,
            property_name,
            encode_value(old_value)?,
            encode_value(new_value)?,
        ))
    }

    /// # Errors
    ///
    /// See [`decode_value`].
    pub fn old_value_as<T: DeserializeOwned>(&self) -> DomainResult<T> {
        decode_value(&self.old_value)
    }

    /// # Errors
    ///
    /// See [`decode_value`].
    pub fn new_value_as<T: DeserializeOwned>(&self) -> DomainResult<T> {
        decode_value(&self.new_value)
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.base.id
    }

    pub fn set_id(&mut self, id: Uuid) {
        self.base.set_id(id);
    }
}

impl HasAuditFields for AuditHistory {
    fn audit(&self) -> &AuditFields {
        &self.base.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.base.audit
    }
}
