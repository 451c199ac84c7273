mod get;
mod list;
mod service;

pub use list::ListProductsQuery;
pub use service::ProductQueryService;
