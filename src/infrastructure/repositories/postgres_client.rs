// src/infrastructure/repositories/postgres_client.rs
use super::map_sqlx;
use crate::domain::client::{
    Client, ClientFilter, ClientId, ClientReadRepository, ClientSex, FullName, PhoneNumber,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub(super) const CLIENT_COLUMNS: &str =
    "id, full_name, phone, sex, is_active, created_at, created_by_id";

#[derive(Debug, FromRow)]
pub(super) struct ClientRow {
    id: i64,
    full_name: String,
    phone: String,
    sex: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    created_by_id: i64,
}

impl TryFrom<ClientRow> for Client {
    type Error = DomainError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId::new(row.id)?,
            full_name: FullName::new(row.full_name)?,
            phone: PhoneNumber::new(row.phone)?,
            sex: row.sex.parse::<ClientSex>()?,
            is_active: row.is_active,
            created_at: row.created_at,
            created_by: UserId::new(row.created_by_id)?,
        })
    }
}

/// `%needle%` with LIKE metacharacters in the needle matched literally.
pub(super) fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[derive(Clone)]
pub struct PostgresClientReadRepository {
    pool: PgPool,
}

impl PostgresClientReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientReadRepository for PostgresClientReadRepository {
    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Client::try_from).transpose()
    }

    async fn list(&self, filter: &ClientFilter, page: PageRequest) -> DomainResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(&format!(
            r"SELECT {CLIENT_COLUMNS} FROM clients
              WHERE ($1::text IS NULL OR full_name ILIKE $1 ESCAPE '\')
                AND ($2::text IS NULL OR phone ILIKE $2 ESCAPE '\')
              ORDER BY id
              OFFSET $3 LIMIT $4"
        ))
        .bind(filter.full_name.as_deref().map(like_pattern))
        .bind(filter.phone.as_deref().map(like_pattern))
        .bind(page.offset_i64())
        .bind(page.limit_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Client::try_from).collect()
    }
}
