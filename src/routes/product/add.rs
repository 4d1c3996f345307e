use crate::forms::product::ProductForm;
use crate::helpers::JsonResponse;
use crate::models::Product;
use crate::services::ProductService;
use actix_web::{post, web, Responder, Result};

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    operation_id = "create_product",
    request_body(content = ProductForm, description = "Product data"),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Error creating product")
    )
)]
#[tracing::instrument(name = "Add product.", skip(body, service))]
#[post("")]
pub async fn add(body: web::Bytes, service: web::Data<ProductService>) -> Result<impl Responder> {
    let form = ProductForm::from_body(&body);

    service
        .create(&form)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_item(product)
                .created("Product created successfully")
        })
        .map_err(|err| super::reject(err, JsonResponse::build().set_list(vec![])))
}
