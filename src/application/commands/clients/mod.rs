mod create;
mod delete;
mod service;
mod toggle;
mod update;

pub use create::CreateClientCommand;
pub use delete::DeleteClientCommand;
pub use service::ClientCommandService;
pub use toggle::SetClientActiveCommand;
pub use update::UpdateClientCommand;
