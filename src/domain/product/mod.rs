pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductFilter, ProductUpdate};
pub use repository::{ProductReadRepository, ProductWriteRepository};
pub use value_objects::{ProductId, ProductName, ProductStatus};
