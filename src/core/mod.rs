pub mod config;
pub mod dnd;
pub mod models;
