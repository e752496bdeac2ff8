// src/application/services/audit_stamper.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::ports::ClockPort;
use crate::config::AuditConfig;
use crate::domain::{audit_history::AuditHistory, auditable::Auditable};

/// Writes creator, editor, timestamps, and the soft-delete flag on auditable
/// entities using an injected clock.
///
/// A missing or blank actor is recorded as the configured system actor.
pub struct AuditStamper {
    clock: Arc<ClockPort>,
    system_actor: String,
}

impl AuditStamper {
    #[must_use]
    pub fn new(clock: Arc<ClockPort>, system_actor: impl Into<String>) -> Self {
        Self {
            clock,
            system_actor: system_actor.into(),
        }
    }

    #[must_use]
    pub fn from_config(clock: Arc<ClockPort>, config: &AuditConfig) -> Self {
        Self::new(clock, config.system_actor())
    }

    #[must_use]
    pub fn system_actor(&self) -> &str {
        &self.system_actor
    }

    fn resolve_actor(&self, actor: Option<&str>) -> String {
        match actor {
            Some(a) if !a.trim().is_empty() => a.to_string(),
            _ => self.system_actor.clone(),
        }
    }

    /// Stamps creator and creation time. A record that already has either is
    /// left untouched and `None` is returned.
    pub fn stamp_created<T>(&self, target: &mut T, actor: Option<&str>) -> Option<DateTime<Utc>>
    where
        T: Auditable + ?Sized,
    {
        let already_created =
            target.created_by().is_some() || target.created_date() != DateTime::<Utc>::default();
        if already_created {
            tracing::warn!(
                created_by = ?target.created_by(),
                created_at = %target.created_date(),
                "creation stamp already present; leaving it unchanged"
            );
            return None;
        }
        let actor = self.resolve_actor(actor);
        let now = self.clock.now();
        tracing::debug!(actor = %actor, at = %now, "stamping creation");
        target.set_created_by(Some(actor));
        target.set_created_date(now);
        Some(now)
    }

    /// Stamps editor and edit time together.
    pub fn stamp_edited<T>(&self, target: &mut T, actor: Option<&str>) -> DateTime<Utc>
    where
        T: Auditable + ?Sized,
    {
        let actor = self.resolve_actor(actor);
        let now = self.clock.now();
        tracing::debug!(actor = %actor, at = %now, "stamping edit");
        target.set_edited_by(Some(actor));
        target.set_edited_date(Some(now));
        now
    }

    /// Marks the record deleted and stamps the edit. A record that is already
    /// deleted keeps its existing edit stamp and `None` is returned.
    pub fn stamp_deleted<T>(&self, target: &mut T, actor: Option<&str>) -> Option<DateTime<Utc>>
    where
        T: Auditable + ?Sized,
    {
        if target.is_deleted() {
            tracing::warn!(
                edited_by = ?target.edited_by(),
                "record is already marked deleted; leaving it unchanged"
            );
            return None;
        }
        target.set_is_deleted(true);
        Some(self.stamp_edited(target, actor))
    }

    pub fn stamp_restored<T>(&self, target: &mut T, actor: Option<&str>) -> DateTime<Utc>
    where
        T: Auditable + ?Sized,
    {
        target.set_is_deleted(false);
        self.stamp_edited(target, actor)
    }

    /// Builds a history entry with a fresh id and its own creation metadata.
    /// The change description is stored exactly as given.
    #[must_use]
    pub fn history_entry(
        &self,
        entity_name: impl Into<String>,
        entity_id: Uuid,
        property_name: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
        actor: Option<&str>,
    ) -> AuditHistory {
        let mut entry =
            AuditHistory::new(entity_name, entity_id, property_name, old_value, new_value);
        entry.set_id(Uuid::new_v4());
        self.stamp_created(&mut entry, actor);
        tracing::debug!(
            history_id = %entry.id(),
            entity = %entry.entity_name,
            entity_id = %entry.entity_id,
            property = %entry.property_name,
            "recorded audit history entry"
        );
        entry
    }
}
