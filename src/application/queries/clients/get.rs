use super::ClientQueryService;
use crate::{
    application::{
        dto::ClientDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::client::ClientId,
};

impl ClientQueryService {
    pub async fn get_client(&self, id: i64) -> ApplicationResult<ClientDto> {
        let not_found = || ApplicationError::not_found(format!("client with id {id} not found"));
        let client_id = ClientId::new(id).map_err(|_| not_found())?;

        self.repo
            .find_by_id(client_id)
            .await?
            .map(ClientDto::from)
            .ok_or_else(not_found)
    }
}
