mod ensure;
mod password;
mod service;

pub use ensure::{EnsureUserCommand, EnsureUserOutcome};
pub use service::UserCommandService;
