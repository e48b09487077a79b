use crate::error::ApiResult;
use crate::events::ProductAddedEvent;
use crate::mediator::{AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, Request};
use crate::services::database::DbPool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub name: String,
    pub inventory: i64,
    pub price: f64,
}

/// Resolves to the id the store assigned.
impl Request<ApiResult<i64>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub DbPool, pub DefaultAsyncMediator);

#[async_trait::async_trait]
impl AsyncRequestHandler<AddProductCommand, ApiResult<i64>> for AddProductRequestHandler {
    async fn handle(&self, command: AddProductCommand) -> ApiResult<i64> {
        let mut conn = self.0.acquire().await?;

        let id = sqlx::query("INSERT INTO products (name, inventory, price) VALUES (?, ?, ?)")
            .bind(command.name.as_str())
            .bind(command.inventory)
            .bind(command.price)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        drop(conn);

        self.1
            .publish(ProductAddedEvent {
                id,
                name: command.name,
            })
            .await?;

        Ok(id)
    }
}
