pub mod audit;
pub mod clients;
pub mod products;
