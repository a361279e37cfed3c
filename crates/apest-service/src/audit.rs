use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured record of a state change, emitted through `tracing`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: &'static str,
    pub resource_type: &'static str,
    pub resource_id: Uuid,
    pub user_id: Option<Uuid>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: &'static str, resource_type: &'static str, resource_id: Uuid) -> Self {
        Self {
            action,
            resource_type,
            resource_id,
            user_id: None,
            details: None,
        }
    }

    pub fn by(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action,
            audit.resource_type = self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.user_id = ?self.user_id,
            audit.details = %details,
            "audit event"
        );
    }
}
