//! Tutorial API: CRUD REST backend for a single tutorial resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, ApiSettings, StoreBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use model::{Tutorial, TutorialInput};
pub use routes::{app, app_from_config, common_routes, tutorial_routes};
pub use service::TutorialService;
pub use state::AppState;
pub use store::{ensure_database_exists, InMemoryTutorialStore, PgTutorialStore, TutorialStore};
