pub mod api;
pub mod app;
pub mod assistant;
pub mod config;
pub mod format;
pub mod message;
pub mod paths;
pub mod render;
pub mod session;
pub mod suggestions;
