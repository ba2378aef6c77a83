//! REST API
//!
//! A CRUD backend exposing two resources over HTTP:
//! - Users: registration, login, lookup, update and deletion
//! - Products: a catalogue with create, list, lookup, partial update and deletion
//!
//! Both stores live in process memory and are injected through [`AppState`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::AppState;
pub use config::AppConfig;

use std::sync::Arc;

use domain::product::Product;
use infrastructure::services::ProductService;
use infrastructure::storage::InMemoryStorage;
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};

/// Create the application state with empty in-memory stores
pub fn create_app_state() -> AppState {
    let user_service = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2Hasher::new()),
    );
    let product_service = ProductService::new(Arc::new(InMemoryStorage::<Product>::new()));

    AppState::new(Arc::new(user_service), Arc::new(product_service))
}
