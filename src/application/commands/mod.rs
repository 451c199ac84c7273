pub mod audit;
pub mod auth;
pub mod clients;
pub mod products;
pub mod users;

pub use audit::AuditRecorder;
