// src/domain/client/entity.rs
use crate::domain::client::value_objects::{ClientId, ClientSex, FullName, PhoneNumber};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub full_name: FullName,
    pub phone: PhoneNumber,
    pub sex: ClientSex,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl Client {
    /// Applies only the fields present in `update`.
    pub fn apply(&mut self, update: &ClientUpdate) {
        if let Some(full_name) = &update.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(sex) = update.sex {
            self.sex = sex;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub full_name: FullName,
    pub phone: PhoneNumber,
    pub sex: ClientSex,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl NewClient {
    pub fn new(
        full_name: FullName,
        phone: PhoneNumber,
        sex: ClientSex,
        created_at: DateTime<Utc>,
        created_by: UserId,
    ) -> Self {
        Self {
            full_name,
            phone,
            sex,
            is_active: true,
            created_at,
            created_by,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub id: ClientId,
    pub full_name: Option<FullName>,
    pub phone: Option<PhoneNumber>,
    pub sex: Option<ClientSex>,
    pub is_active: Option<bool>,
}

impl ClientUpdate {
    pub fn new(id: ClientId) -> Self {
        Self {
            id,
            full_name: None,
            phone: None,
            sex: None,
            is_active: None,
        }
    }

    pub fn with_full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_sex(mut self, sex: ClientSex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Listing filters; string filters are case-insensitive substrings.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        contains_ci(client.full_name.as_str(), self.full_name.as_deref())
            && contains_ci(client.phone.as_str(), self.phone.as_deref())
    }
}

pub(crate) fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}
