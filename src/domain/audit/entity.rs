// src/domain/audit/entity.rs
use crate::domain::errors::DomainError;
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Disable,
    Enable,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Disable => "disable",
            AuditAction::Enable => "enable",
        }
    }

    /// ENABLE/DISABLE follow the requested value, not whether it changed.
    pub fn for_active_flag(is_active: bool) -> Self {
        if is_active {
            AuditAction::Enable
        } else {
            AuditAction::Disable
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            "disable" => Ok(AuditAction::Disable),
            "enable" => Ok(AuditAction::Enable),
            other => Err(DomainError::Validation(format!(
                "unknown audit action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditTarget {
    Client,
    Product,
}

impl AuditTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditTarget::Client => "Client",
            AuditTarget::Product => "Product",
        }
    }
}

impl fmt::Display for AuditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the `changes` payload per action.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditChanges {
    Created {
        new_data: serde_json::Value,
    },
    Updated {
        old_data: serde_json::Value,
        new_data: serde_json::Value,
    },
    Deleted {
        deleted_data: serde_json::Value,
    },
    StatusChanged {
        old_status: bool,
        new_status: bool,
    },
}

impl AuditChanges {
    pub fn into_json(self) -> serde_json::Value {
        match self {
            AuditChanges::Created { new_data } => serde_json::json!({ "new_data": new_data }),
            AuditChanges::Updated { old_data, new_data } => {
                serde_json::json!({ "old_data": old_data, "new_data": new_data })
            }
            AuditChanges::Deleted { deleted_data } => {
                serde_json::json!({ "deleted_data": deleted_data })
            }
            AuditChanges::StatusChanged {
                old_status,
                new_status,
            } => serde_json::json!({ "old_status": old_status, "new_status": new_status }),
        }
    }
}

/// Append-only; never updated or deleted once written.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub user_id: UserId,
    pub target_model: String,
    pub target_id: i64,
    pub changes: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub user_id: UserId,
    pub target: AuditTarget,
    pub target_id: i64,
    pub changes: AuditChanges,
}

/// An audit entry joined with its actor; `actor` is `None` once the user is gone.
#[derive(Debug, Clone)]
pub struct AuditLogRecord {
    pub entry: AuditLog,
    pub actor: Option<UserSummary>,
}
