use crate::helpers::JsonResponse;
use crate::models::Product;
use crate::services::ProductService;
use actix_web::{get, web, Responder, Result};

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    operation_id = "list_products",
    responses(
        (status = 200, description = "Successful operation", body = Vec<Product>),
        (status = 404, description = "No products found"),
        (status = 500, description = "Error retrieving products")
    )
)]
#[tracing::instrument(name = "Get all products.", skip(service))]
#[get("")]
pub async fn list(service: web::Data<ProductService>) -> Result<impl Responder> {
    service
        .list()
        .await
        .map(|products| {
            JsonResponse::build()
                .set_list(products)
                .ok("Products retrieved successfully")
        })
        .map_err(|err| super::reject(err, JsonResponse::build()))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "get_product",
    params(("id" = i64, Path, description = "ID of the product")),
    responses(
        (status = 200, description = "Product retrieved successfully", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Error retrieving product")
    )
)]
#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i64,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    service
        .get(id)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_item(product)
                .ok("Product retrieved successfully")
        })
        .map_err(|err| super::reject(err, JsonResponse::build()))
}
