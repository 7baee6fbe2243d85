pub mod admin;
pub mod api;
pub mod config;
pub mod crafting;
pub mod error;
pub mod models;
pub mod ui;

pub use admin::AdminPanel;
pub use crafting::CraftingPage;
