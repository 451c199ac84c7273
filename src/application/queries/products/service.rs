use crate::domain::product::ProductReadRepository;
use std::sync::Arc;

pub struct ProductQueryService {
    pub(super) repo: Arc<dyn ProductReadRepository>,
}

impl ProductQueryService {
    pub fn new(repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { repo }
    }
}
