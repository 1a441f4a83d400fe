// Crate root library declaration and module exports.
pub mod cli;
pub mod collab;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod history;
pub mod import;
pub mod logging;
pub mod model;
pub mod observer;
pub mod query;
pub mod store;
pub mod validation;

#[cfg(feature = "tui")]
pub mod tui;

pub use controller::TaskController;
pub use error::{TaskError, TaskResult};
pub use store::TaskStore;
