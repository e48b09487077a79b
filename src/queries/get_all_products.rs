use crate::error::ApiResult;
use crate::mediator::{AsyncRequestHandler, Request};
use crate::models::Product;
use crate::services::database::DbPool;
use crate::services::query_builder::SELECT_ALL_PRODUCTS;

pub struct GetAllProductsRequest;
impl Request<ApiResult<Vec<Product>>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub DbPool);

#[async_trait::async_trait]
impl AsyncRequestHandler<GetAllProductsRequest, ApiResult<Vec<Product>>>
    for GetAllProductsRequestHandler
{
    async fn handle(&self, _: GetAllProductsRequest) -> ApiResult<Vec<Product>> {
        let mut conn = self.0.acquire().await?;
        let products = sqlx::query_as::<_, Product>(SELECT_ALL_PRODUCTS)
            .fetch_all(&mut *conn)
            .await?;

        Ok(products)
    }
}
