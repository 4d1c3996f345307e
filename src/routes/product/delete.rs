use crate::helpers::JsonResponse;
use crate::models::Product;
use crate::services::ProductService;
use actix_web::{delete, web, Responder, Result};

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "delete_product",
    params(("id" = i64, Path, description = "ID of the product")),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Error deleting product")
    )
)]
#[tracing::instrument(name = "Delete product.", skip(service))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i64,)>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    service
        .delete(id)
        .await
        .map(|_| JsonResponse::<Product>::build().ok("Product deleted successfully"))
        .map_err(|err| super::reject(err, JsonResponse::build()))
}
