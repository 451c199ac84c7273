pub mod audit;
pub mod auth;
pub mod clients;
pub mod products;
pub mod users;

pub use audit::AuditLogDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, VerifiedToken};
pub use clients::ClientDto;
pub use products::ProductDto;
pub use users::UserDto;
