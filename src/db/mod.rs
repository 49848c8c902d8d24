pub mod chirp;
pub mod postgres_service;
pub mod user;
