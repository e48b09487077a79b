use crate::error::{ApiError, ApiResult};
use crate::events::ProductUpdatedEvent;
use crate::mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
use crate::models::ProductChanges;
use crate::services::database::DbPool;
use crate::services::query_builder::update_statement;

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: i64,
    pub changes: ProductChanges,
}

impl Request<ApiResult<()>> for UpdateProductCommand {}

pub struct UpdateProductRequestHandler(pub DbPool, pub DefaultAsyncMediator);

#[async_trait::async_trait]
impl AsyncRequestHandler<UpdateProductCommand, ApiResult<()>> for UpdateProductRequestHandler {
    async fn handle(&self, command: UpdateProductCommand) -> ApiResult<()> {
        let mut conn = self.0.acquire().await?;

        let exists = sqlx::query("SELECT id FROM products WHERE id = ?")
            .bind(command.id)
            .fetch_optional(&mut *conn)
            .await?
            .is_some();

        if !exists {
            return Err(ApiError::product_not_found());
        }

        let Some(mut statement) = update_statement(command.id, &command.changes) else {
            log::debug!("Nothing to update for product {}", command.id);
            return Ok(());
        };

        statement.build().execute(&mut *conn).await?;
        drop(conn);

        self.1
            .publish(ProductUpdatedEvent {
                id: command.id,
                changes: command.changes,
            })
            .await?;

        Ok(())
    }
}
