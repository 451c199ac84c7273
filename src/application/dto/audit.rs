use crate::domain::audit::{AuditAction, AuditLogRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::users::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditLogDto {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub user_id: i64,
    pub target_model: String,
    pub target_id: i64,
    #[schema(value_type = Object)]
    pub changes: serde_json::Value,
    /// `null` when the acting user no longer exists.
    pub user: Option<UserDto>,
}

impl From<AuditLogRecord> for AuditLogDto {
    fn from(record: AuditLogRecord) -> Self {
        let AuditLogRecord { entry, actor } = record;
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            action: entry.action,
            user_id: entry.user_id.into(),
            target_model: entry.target_model,
            target_id: entry.target_id,
            changes: entry.changes,
            user: actor.map(Into::into),
        }
    }
}
