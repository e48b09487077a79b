//! # inventory_api
//! An inventory CRUD service over a single `products` table.
//!
//! HTTP endpoints translate requests into commands and queries, the
//! [mediator] dispatches each one to its handler, and handlers talk to the
//! store through a pool injected at construction.

pub mod commands;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod mediator;
pub mod models;
pub mod queries;
pub mod services;

use crate::error::ApiError;
use crate::mediator::DefaultAsyncMediator;
use crate::services::database::DbPool;
use actix_web::web;

/// Registers the product handlers and event subscribers.
pub fn create_mediator(pool: DbPool) -> DefaultAsyncMediator {
    use commands::*;
    use events::*;
    use queries::*;

    DefaultAsyncMediator::builder()
        // Queries
        .add_handler(GetAllProductsRequestHandler(pool.clone()))
        .add_handler(GetProductRequestHandler(pool.clone()))
        .add_handler(QueryProductsRequestHandler(pool.clone()))
        // Commands
        .add_handler_deferred(|m| AddProductRequestHandler(pool.clone(), m))
        .add_handler_deferred(|m| UpdateProductRequestHandler(pool.clone(), m))
        .add_handler_deferred(|m| DeleteProductRequestHandler(pool.clone(), m))
        // Events
        .subscribe_fn(|event: ProductAddedEvent| async move {
            log::info!("Added: {} - {}", event.name, event.id);
        })
        .subscribe_fn(|event: ProductUpdatedEvent| async move {
            log::info!("Updated: {} - {:?}", event.id, event.changes);
        })
        .subscribe_fn(|event: ProductDeletedEvent| async move {
            log::info!("Deleted: {}", event.0);
        })
        .build()
}

/// Mounts the `/api/products` routes and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use endpoints::products;

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default().error_handler(|_, _| ApiError::product_not_found().into()),
    )
    .service(
        web::scope("/api/products")
            .service(products::get_all)
            .service(products::create)
            .service(products::query)
            .service(products::get)
            .service(products::update)
            .service(products::delete),
    );
}
