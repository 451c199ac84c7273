use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::client::{Client, ClientSex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    pub sex: ClientSex,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i64,
}

impl ClientDto {
    /// Snapshot stored in audit payloads.
    pub fn snapshot(&self) -> ApplicationResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| {
            ApplicationError::internal(format!("failed to serialize audit snapshot: {err}"))
        })
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into(),
            full_name: client.full_name.into_inner(),
            phone: client.phone.into_inner(),
            sex: client.sex,
            is_active: client.is_active,
            created_at: client.created_at,
            created_by_id: client.created_by.into(),
        }
    }
}
