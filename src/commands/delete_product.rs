use crate::error::ApiResult;
use crate::events::ProductDeletedEvent;
use crate::mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
use crate::services::database::DbPool;

pub struct DeleteProductCommand(pub i64);

/// Succeeds whether or not the row existed.
impl Request<ApiResult<()>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub DbPool, pub DefaultAsyncMediator);

#[async_trait::async_trait]
impl AsyncRequestHandler<DeleteProductCommand, ApiResult<()>> for DeleteProductRequestHandler {
    async fn handle(&self, command: DeleteProductCommand) -> ApiResult<()> {
        let mut conn = self.0.acquire().await?;

        let deleted = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(command.0)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        drop(conn);

        if deleted > 0 {
            self.1.publish(ProductDeletedEvent(command.0)).await?;
        } else {
            log::debug!("Product {} was already absent", command.0);
        }

        Ok(())
    }
}
