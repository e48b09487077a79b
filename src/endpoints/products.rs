use crate::commands::{AddProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::error::ApiResult;
use crate::mediator::{AsyncMediator, DefaultAsyncMediator};
use crate::models::{MessageResponse, Product, ProductChanges, ProductEnvelope, ProductFilter, ProductList};
use crate::queries::{GetAllProductsRequest, GetProductRequest, QueryProductsRequest};
use actix_web::http::header;
use actix_web::web::{self, Data, Json, Query};
use actix_web::{delete, get, post, put, HttpResponse};

#[get("")]
pub async fn get_all(mediator: Data<DefaultAsyncMediator>) -> ApiResult<HttpResponse> {
    let products: Vec<Product> = mediator.send(GetAllProductsRequest).await??;
    Ok(HttpResponse::Ok().json(ProductList { products }))
}

#[post("")]
pub async fn create(
    mediator: Data<DefaultAsyncMediator>,
    body: Json<AddProductCommand>,
) -> ApiResult<HttpResponse> {
    let id: i64 = mediator.send(body.into_inner()).await??;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/products/{}", id)))
        .json(MessageResponse::new("Product added successfully")))
}

// Registered ahead of `/{id}` so "query" is never read as an id.
#[get("/query")]
pub async fn query(
    mediator: Data<DefaultAsyncMediator>,
    filter: Query<ProductFilter>,
) -> ApiResult<HttpResponse> {
    let products: Vec<Product> = mediator
        .send(QueryProductsRequest(filter.into_inner()))
        .await??;

    Ok(HttpResponse::Ok().json(ProductList { products }))
}

#[get("/{id}")]
pub async fn get(path: web::Path<i64>, mediator: Data<DefaultAsyncMediator>) -> ApiResult<HttpResponse> {
    let product: Product = mediator.send(GetProductRequest(path.into_inner())).await??;
    Ok(HttpResponse::Ok().json(ProductEnvelope { product }))
}

#[put("/{id}")]
pub async fn update(
    path: web::Path<i64>,
    mediator: Data<DefaultAsyncMediator>,
    body: Json<ProductChanges>,
) -> ApiResult<HttpResponse> {
    let command = UpdateProductCommand {
        id: path.into_inner(),
        changes: body.into_inner(),
    };
    mediator.send(command).await??;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Product updated successfully")))
}

#[delete("/{id}")]
pub async fn delete(path: web::Path<i64>, mediator: Data<DefaultAsyncMediator>) -> ApiResult<HttpResponse> {
    mediator.send(DeleteProductCommand(path.into_inner())).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product deleted successfully")))
}
