pub mod app;
pub mod authz;
pub mod bearer;
pub mod config;
pub mod docs;
pub mod errors;
pub mod guard;
pub mod models;
pub mod routes;
pub mod session;
pub mod upstream;

// Re-export commonly used items for tests
pub use app::{create_app, AppState};
