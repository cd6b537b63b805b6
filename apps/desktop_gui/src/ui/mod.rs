//! UI layer for the user directory: the app shell and its panels.

pub mod app;

pub use app::UserDirectoryApp;
