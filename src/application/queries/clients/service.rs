use crate::domain::client::ClientReadRepository;
use std::sync::Arc;

pub struct ClientQueryService {
    pub(super) repo: Arc<dyn ClientReadRepository>,
}

impl ClientQueryService {
    pub fn new(repo: Arc<dyn ClientReadRepository>) -> Self {
        Self { repo }
    }
}
