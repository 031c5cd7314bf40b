//! # linkcut
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Database access
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - Short codes are 6-8 alphanumeric characters, generated or caller-supplied
//! - Redirects answer 302 Found and record the click before responding
//! - Click counting is a single atomic statement at the storage layer, so
//!   concurrent redirects for the same code never lose updates
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://linkcut.db
//! export DATABASE_URL="sqlite://linkcut.db"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
