#![warn(clippy::pedantic)]

pub mod app;
pub mod command;
pub mod composer;
pub mod config;
mod error;
pub mod format;
pub mod model;
pub mod session;
pub mod store;
pub mod trace;
pub mod view;

pub use app::App;
pub use config::Config;
pub use error::Error;
pub use store::PostStore;
