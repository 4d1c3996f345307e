use crate::forms::product::ProductForm;
use crate::helpers::JsonResponse;
use crate::models::Product;
use crate::services::ProductService;
use actix_web::{put, web, Responder, Result};

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "update_product",
    params(("id" = i64, Path, description = "ID of the product")),
    request_body(content = ProductForm, description = "Updated product data"),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Error updating product")
    )
)]
#[tracing::instrument(name = "Update product.", skip(body, service))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i64,)>,
    body: web::Bytes,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let form = ProductForm::from_body(&body);

    service
        .update(id, &form)
        .await
        .map(|product| {
            tracing::debug!("Updated {}", product);
            JsonResponse::build()
                .set_item(product)
                .ok("Product updated successfully")
        })
        .map_err(|err| super::reject(err, JsonResponse::build()))
}
