mod create;
mod delete;
mod service;
mod update;

pub use create::CreateProductCommand;
pub use delete::DeleteProductCommand;
pub use service::ProductCommandService;
pub use update::UpdateProductCommand;
