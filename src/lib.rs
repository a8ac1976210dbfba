pub mod config;
pub mod infrastructure;
pub mod routes;
pub mod state;
pub mod usecases;
pub mod utils;
