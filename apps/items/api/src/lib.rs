//! Items HTTP service
//!
//! ## Architecture
//!
//! ```text
//! HTTP request
//!   ↓ (axum router: /items, /health, docs)
//! handlers (domain_items::handlers)
//!   ↓
//! ItemService (validation, existence checks)
//!   ↓
//! InMemoryItemRepository (items + id counter behind one lock)
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `openapi`: Aggregated OpenAPI document

pub mod config;
pub mod openapi;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_items::{InMemoryItemRepository, ItemService, handlers};

use config::Config;

/// Build the complete application router around a fresh, empty item store.
pub fn build_router(config: &Config) -> Router {
    let service = ItemService::new(InMemoryItemRepository::new());

    let api_routes = Router::new()
        .nest("/items", handlers::router(service))
        .merge(health_router(config.app));

    create_router::<openapi::ApiDoc>(api_routes)
}
