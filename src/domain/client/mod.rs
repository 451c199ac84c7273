pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Client, ClientFilter, ClientUpdate, NewClient};
pub use repository::{ClientReadRepository, ClientWriteRepository};
pub use value_objects::{ClientId, ClientSex, FullName, PhoneNumber};
