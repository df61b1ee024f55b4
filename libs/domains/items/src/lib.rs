//! Items Domain
//!
//! CRUD over a single collection of items held in process memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, routing, response shaping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Payload validation, existence checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Item store + id counter (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, request payload, validation rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let app: Router = Router::new().nest("/items", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ITEM_NOT_FOUND, ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemInput, ItemPayload, validate_item_payload};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
