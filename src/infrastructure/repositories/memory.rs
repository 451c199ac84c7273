// src/infrastructure/repositories/memory.rs
use crate::domain::audit::{
    AuditLog, AuditLogRecord, AuditLogRepository, AuditLogWriter, NewAuditLog,
};
use crate::domain::client::{
    Client, ClientFilter, ClientId, ClientReadRepository, ClientUpdate, ClientWriteRepository,
    NewClient,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::product::{
    NewProduct, Product, ProductFilter, ProductId, ProductReadRepository, ProductUpdate,
    ProductWriteRepository,
};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::domain::user::{Login, NewUser, User, UserId, UserRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    clients: BTreeMap<i64, Client>,
    products: BTreeMap<i64, Product>,
    audit_logs: Vec<AuditLog>,
    next_user_id: i64,
    next_client_id: i64,
    next_product_id: i64,
    next_audit_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

fn page_slice<T>(items: impl Iterator<Item = T>, page: PageRequest) -> Vec<T> {
    items
        .skip(usize::try_from(page.skip).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
        .collect()
}

/// Process-local storage with the same constraints as the database schema.
///
/// A unit of work holds the state lock until it commits or is dropped, so
/// mutations are fully serialized.
#[derive(Clone, Default)]
pub struct InMemoryCrmStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryCrmStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn client_count(&self) -> usize {
        self.state.lock().await.clients.len()
    }

    pub async fn audit_count(&self) -> usize {
        self.state.lock().await.audit_logs.len()
    }

    /// Drops a user row while leaving its audit history in place.
    pub async fn remove_user(&self, id: UserId) -> bool {
        self.state.lock().await.users.remove(&i64::from(id)).is_some()
    }
}

#[async_trait]
impl UserRepository for InMemoryCrmStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().await;
        if state.users.values().any(|u| u.login == new_user.login) {
            return Err(DomainError::conflict("login already exists"));
        }

        let id = next_id(&mut state.next_user_id);
        let user = User {
            id: UserId(id),
            login: new_user.login,
            password_hash: new_user.password_hash,
            role: new_user.role,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.values().find(|u| &u.login == login).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&i64::from(id)).cloned())
    }
}

#[async_trait]
impl ClientReadRepository for InMemoryCrmStore {
    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>> {
        Ok(self.state.lock().await.clients.get(&i64::from(id)).cloned())
    }

    async fn list(&self, filter: &ClientFilter, page: PageRequest) -> DomainResult<Vec<Client>> {
        let state = self.state.lock().await;
        let matching = state.clients.values().filter(|c| filter.matches(c)).cloned();
        Ok(page_slice(matching, page))
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCrmStore {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.state.lock().await.products.get(&i64::from(id)).cloned())
    }

    async fn list(&self, filter: &ProductFilter, page: PageRequest) -> DomainResult<Vec<Product>> {
        let state = self.state.lock().await;
        let matching = state.products.values().filter(|p| filter.matches(p)).cloned();
        Ok(page_slice(matching, page))
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryCrmStore {
    async fn list(&self, page: PageRequest) -> DomainResult<Vec<AuditLogRecord>> {
        let state = self.state.lock().await;
        let mut entries: Vec<&AuditLog> = state.audit_logs.iter().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

        let records = entries.into_iter().map(|entry| AuditLogRecord {
            entry: entry.clone(),
            actor: state
                .users
                .get(&i64::from(entry.user_id))
                .map(User::summary),
        });
        Ok(page_slice(records, page))
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryCrmStore {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryUnitOfWork { guard, working }))
    }
}

/// Writes go to `working`; commit copies it back under the held lock.
struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

impl MemoryUnitOfWork {
    fn ensure_phone_free(&self, phone: &str, except: Option<i64>) -> DomainResult<()> {
        let taken = self
            .working
            .clients
            .values()
            .any(|c| c.phone.as_str() == phone && Some(i64::from(c.id)) != except);
        if taken {
            Err(DomainError::conflict(
                "a client with this phone number already exists",
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ClientWriteRepository for MemoryUnitOfWork {
    async fn lock_client(&mut self, id: ClientId) -> DomainResult<Option<Client>> {
        Ok(self.working.clients.get(&i64::from(id)).cloned())
    }

    async fn insert_client(&mut self, client: NewClient) -> DomainResult<Client> {
        self.ensure_phone_free(client.phone.as_str(), None)?;

        let id = next_id(&mut self.working.next_client_id);
        let stored = Client {
            id: ClientId(id),
            full_name: client.full_name,
            phone: client.phone,
            sex: client.sex,
            is_active: client.is_active,
            created_at: client.created_at,
            created_by: client.created_by,
        };
        self.working.clients.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_client(&mut self, update: ClientUpdate) -> DomainResult<Client> {
        let key = i64::from(update.id);
        if let Some(phone) = &update.phone {
            self.ensure_phone_free(phone.as_str(), Some(key))?;
        }

        let client = self
            .working
            .clients
            .get_mut(&key)
            .ok_or_else(|| DomainError::not_found(format!("client with id {key} not found")))?;
        client.apply(&update);
        Ok(client.clone())
    }

    async fn delete_client(&mut self, id: ClientId) -> DomainResult<()> {
        if self.working.products.values().any(|p| p.client_id == id) {
            return Err(DomainError::conflict(format!(
                "client with id {id} still has products"
            )));
        }
        self.working
            .clients
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("client with id {id} not found")))
    }
}

#[async_trait]
impl ProductWriteRepository for MemoryUnitOfWork {
    async fn lock_product(&mut self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.working.products.get(&i64::from(id)).cloned())
    }

    async fn insert_product(&mut self, product: NewProduct) -> DomainResult<Product> {
        if !self
            .working
            .clients
            .contains_key(&i64::from(product.client_id))
        {
            return Err(DomainError::not_found("client not found"));
        }

        let id = next_id(&mut self.working.next_product_id);
        let stored = Product {
            id: ProductId(id),
            name: product.name,
            status: product.status,
            created_at: product.created_at,
            client_id: product.client_id,
        };
        self.working.products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_product(&mut self, update: ProductUpdate) -> DomainResult<Product> {
        let key = i64::from(update.id);
        let product = self
            .working
            .products
            .get_mut(&key)
            .ok_or_else(|| DomainError::not_found(format!("product with id {key} not found")))?;
        product.apply(&update);
        Ok(product.clone())
    }

    async fn delete_product(&mut self, id: ProductId) -> DomainResult<()> {
        self.working
            .products
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("product with id {id} not found")))
    }

    async fn count_products_for_client(&mut self, client_id: ClientId) -> DomainResult<u64> {
        let count = self
            .working
            .products
            .values()
            .filter(|p| p.client_id == client_id)
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl AuditLogWriter for MemoryUnitOfWork {
    async fn append_audit(&mut self, entry: NewAuditLog) -> DomainResult<AuditLog> {
        let id = next_id(&mut self.working.next_audit_id);
        let log = AuditLog {
            id,
            timestamp: entry.timestamp,
            action: entry.action,
            user_id: entry.user_id,
            target_model: entry.target.as_str().to_string(),
            target_id: entry.target_id,
            changes: entry.changes.into_json(),
        };
        self.working.audit_logs.push(log.clone());
        Ok(log)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let MemoryUnitOfWork { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ClientSex, FullName, PhoneNumber};
    use chrono::Utc;

    fn new_client(phone: &str) -> NewClient {
        NewClient::new(
            FullName::new("Test Client").unwrap(),
            PhoneNumber::new(phone).unwrap(),
            ClientSex::Other,
            Utc::now(),
            UserId(1),
        )
    }

    #[tokio::test]
    async fn dropped_unit_of_work_discards_writes() {
        let store = InMemoryCrmStore::new();
        {
            let mut uow = store.begin().await.unwrap();
            uow.insert_client(new_client("+100")).await.unwrap();
        }
        assert_eq!(store.client_count().await, 0);

        let mut uow = store.begin().await.unwrap();
        uow.insert_client(new_client("+100")).await.unwrap();
        uow.commit().await.unwrap();
        assert_eq!(store.client_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_phone_is_a_conflict() {
        let store = InMemoryCrmStore::new();
        let mut uow = store.begin().await.unwrap();
        uow.insert_client(new_client("+100")).await.unwrap();
        let err = uow.insert_client(new_client("+100")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn products_require_existing_client() {
        let store = InMemoryCrmStore::new();
        let mut uow = store.begin().await.unwrap();
        let err = uow
            .insert_product(NewProduct {
                name: crate::domain::product::ProductName::new("Widget").unwrap(),
                status: Default::default(),
                created_at: Utc::now(),
                client_id: ClientId(42),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
