pub mod audit;
pub mod client;
pub mod errors;
pub mod pagination;
pub mod product;
pub mod unit_of_work;
pub mod user;
