pub mod entity;
pub mod repository;

pub use entity::{AuditAction, AuditChanges, AuditLog, AuditLogRecord, AuditTarget, NewAuditLog};
pub use repository::{AuditLogRepository, AuditLogWriter};
