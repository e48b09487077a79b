//! An in-process mediator: requests are dispatched by type to exactly one
//! registered handler, events are broadcast to every subscriber.
//!
//! ## Example
//! ```rust
//! use inventory_api::mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
//!
//! struct Double(u32);
//! impl Request<u32> for Double {}
//!
//! struct DoubleHandler;
//!
//! #[async_trait::async_trait]
//! impl AsyncRequestHandler<Double, u32> for DoubleHandler {
//!     async fn handle(&self, req: Double) -> u32 {
//!         req.0 * 2
//!     }
//! }
//!
//! # actix_web::rt::System::new().block_on(async {
//! let mediator = DefaultAsyncMediator::builder()
//!     .add_handler(DoubleHandler)
//!     .build();
//!
//! assert_eq!(Ok(4), mediator.send(Double(2)).await);
//! # });
//! ```

/// A convenient result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A boxed future.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

mod request;
pub use request::*;

mod event;
pub use event::*;

mod error;
pub use error::*;

mod mediator_impl;
pub use mediator_impl::*;

/// A mediator is a central hub for communication between components.
#[async_trait::async_trait]
pub trait AsyncMediator: Send + Sync {
    /// Sends a request to the mediator.
    async fn send<Req, Res>(&self, req: Req) -> Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static;

    /// Publish an event to the mediator.
    async fn publish<E>(&self, event: E) -> Result<()>
    where
        E: Event + Sync + Send + 'static;
}
