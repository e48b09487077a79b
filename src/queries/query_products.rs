use crate::error::{ApiError, ApiResult};
use crate::mediator::{AsyncRequestHandler, Request};
use crate::models::{Product, ProductFilter};
use crate::services::database::DbPool;
use crate::services::query_builder::filtered_select;

pub struct QueryProductsRequest(pub ProductFilter);

/// Unlike [GetAllProductsRequest](crate::queries::GetAllProductsRequest),
/// an empty result is an error.
impl Request<ApiResult<Vec<Product>>> for QueryProductsRequest {}

pub struct QueryProductsRequestHandler(pub DbPool);

#[async_trait::async_trait]
impl AsyncRequestHandler<QueryProductsRequest, ApiResult<Vec<Product>>>
    for QueryProductsRequestHandler
{
    async fn handle(&self, req: QueryProductsRequest) -> ApiResult<Vec<Product>> {
        let mut query = filtered_select(&req.0);
        log::debug!("Querying products: {}", query.sql());

        let mut conn = self.0.acquire().await?;
        let products = query
            .build_query_as::<Product>()
            .fetch_all(&mut *conn)
            .await?;

        if products.is_empty() {
            return Err(ApiError::NotFound("No products found".to_owned()));
        }

        Ok(products)
    }
}
