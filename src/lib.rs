pub mod app;
pub mod blog;
pub mod client;
pub mod config;
pub mod contact;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod page;
pub mod routine;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::ApiClient;
pub use state::AppState;
