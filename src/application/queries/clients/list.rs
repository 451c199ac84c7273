use super::ClientQueryService;
use crate::{
    application::{dto::ClientDto, error::ApplicationResult},
    domain::{client::ClientFilter, pagination::PageRequest},
};

#[derive(Debug, Clone, Default)]
pub struct ListClientsQuery {
    pub skip: u64,
    pub limit: u32,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl ClientQueryService {
    /// Ordered by id; blank filters are ignored.
    pub async fn list_clients(&self, query: ListClientsQuery) -> ApplicationResult<Vec<ClientDto>> {
        let filter = ClientFilter {
            full_name: non_blank(query.full_name),
            phone: non_blank(query.phone),
        };
        let page = PageRequest::new(query.skip, query.limit);

        let clients = self.repo.list(&filter, page).await?;
        Ok(clients.into_iter().map(ClientDto::from).collect())
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
