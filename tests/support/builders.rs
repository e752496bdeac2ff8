// tests/support/builders.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

use domain_base::domain::audit_history::AuditHistory;
use domain_base::domain::auditable::{AuditFields, AuditableBase};

use super::mocks::fixed_now;

pub struct HistoryBuilder {
    id: Uuid,
    entity_name: String,
    entity_id: Uuid,
    property_name: String,
    old_value: String,
    new_value: String,
    recorded_by: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl HistoryBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_name: "Product".into(),
            entity_id: Uuid::new_v4(),
            property_name: "Price".into(),
            old_value: "10.00".into(),
            new_value: "12.50".into(),
            recorded_by: Some("auditor".into()),
            recorded_at: fixed_now(),
        }
    }

    pub fn entity_id(mut self, entity_id: Uuid) -> Self {
        self.entity_id = entity_id;
        self
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        self.property_name = name.into();
        self.old_value = old_value.into();
        self.new_value = new_value.into();
        self
    }

    pub fn build(self) -> AuditHistory {
        AuditHistory {
            base: AuditableBase::new(self.id, AuditFields::new(self.recorded_by, self.recorded_at)),
            entity_name: self.entity_name,
            entity_id: self.entity_id,
            property_name: self.property_name,
            old_value: self.old_value,
            new_value: self.new_value,
        }
    }
}
