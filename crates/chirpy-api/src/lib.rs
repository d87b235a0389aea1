pub mod admin;
pub mod chirps;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod users;
pub mod validate;

pub use config::{Config, Platform};
pub use routes::router;
pub use state::{AppState, AppStateInner};
