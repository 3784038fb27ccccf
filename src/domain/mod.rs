pub mod error;
pub mod executor;
pub mod models;
pub mod services;
pub mod statement;
