use crate::error::{ApiError, ApiResult};
use crate::mediator::{AsyncRequestHandler, Request};
use crate::models::Product;
use crate::services::database::DbPool;
use crate::services::query_builder::SELECT_PRODUCT_BY_ID;

pub struct GetProductRequest(pub i64);
impl Request<ApiResult<Product>> for GetProductRequest {}

pub struct GetProductRequestHandler(pub DbPool);

#[async_trait::async_trait]
impl AsyncRequestHandler<GetProductRequest, ApiResult<Product>> for GetProductRequestHandler {
    async fn handle(&self, req: GetProductRequest) -> ApiResult<Product> {
        let mut conn = self.0.acquire().await?;
        let product = sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
            .bind(req.0)
            .fetch_optional(&mut *conn)
            .await?;

        product.ok_or_else(ApiError::product_not_found)
    }
}
