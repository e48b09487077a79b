/// Represents a request to the mediator.
pub trait Request<Res> {}

/// Handles a request to the mediator.
///
/// Handlers are shared between concurrent requests, so they take `&self`
/// and keep any state they need behind cheap clones (a connection pool, a mediator).
#[async_trait::async_trait]
pub trait AsyncRequestHandler<Req, Res>: Send + Sync
where
    Req: Request<Res> + Send + 'static,
    Res: Send + 'static,
{
    /// Handle a request and returns the response.
    async fn handle(&self, req: Req) -> Res;
}
