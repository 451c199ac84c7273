use super::map_sqlx;
use crate::domain::audit::{AuditAction, AuditLog, AuditLogRecord, AuditLogRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::{Login, Role, UserId, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub(super) const AUDIT_COLUMNS: &str =
    "id, logged_at, action, user_id, target_model, target_id, changes";

#[derive(Debug, FromRow)]
pub(super) struct AuditLogRow {
    id: i64,
    logged_at: DateTime<Utc>,
    action: String,
    user_id: i64,
    target_model: String,
    target_id: i64,
    changes: serde_json::Value,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: row.id,
            timestamp: row.logged_at,
            action: row.action.parse::<AuditAction>()?,
            user_id: UserId(row.user_id),
            target_model: row.target_model,
            target_id: row.target_id,
            changes: row.changes,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuditLogWithActorRow {
    #[sqlx(flatten)]
    entry: AuditLogRow,
    actor_login: Option<String>,
    actor_role: Option<String>,
}

impl TryFrom<AuditLogWithActorRow> for AuditLogRecord {
    type Error = DomainError;

    fn try_from(row: AuditLogWithActorRow) -> Result<Self, Self::Error> {
        let entry = AuditLog::try_from(row.entry)?;
        let actor = match (row.actor_login, row.actor_role) {
            (Some(login), Some(role)) => Some(UserSummary {
                id: entry.user_id,
                login: Login::new(login)?,
                role: role.parse::<Role>()?,
            }),
            _ => None,
        };
        Ok(AuditLogRecord { entry, actor })
    }
}

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn list(&self, page: PageRequest) -> DomainResult<Vec<AuditLogRecord>> {
        let rows = sqlx::query_as::<_, AuditLogWithActorRow>(
            r#"
            SELECT a.id, a.logged_at, a.action, a.user_id, a.target_model, a.target_id, a.changes,
                   u.login AS actor_login, u.role AS actor_role
            FROM audit_logs a
            LEFT JOIN users u ON u.id = a.user_id
            ORDER BY a.logged_at DESC, a.id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset_i64())
        .bind(page.limit_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AuditLogRecord::try_from).collect()
    }
}
