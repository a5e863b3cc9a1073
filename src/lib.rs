pub mod api;
pub mod config;
pub mod controller;
pub mod default_colors;
pub mod error;
pub mod terminal;
pub mod types;
pub mod validate;
pub mod view;
