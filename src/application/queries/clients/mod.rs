mod get;
mod list;
mod service;

pub(crate) use list::non_blank;
pub use list::ListClientsQuery;
pub use service::ClientQueryService;
