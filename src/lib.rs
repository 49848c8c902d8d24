//! Chirpy is a small micro-blogging HTTP API: users sign up and log in,
//! post 140-character chirps, and read them back. An admin surface reports
//! how often the bundled static site has been served.

pub mod config;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod types;
pub mod utils;
