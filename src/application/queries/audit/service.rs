use crate::domain::audit::AuditLogRepository;
use std::sync::Arc;

pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditLogRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }
}
