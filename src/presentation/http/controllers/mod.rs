// src/presentation/http/controllers/mod.rs
pub mod audit;
pub mod auth;
pub mod clients;
pub mod products;
pub mod users;
