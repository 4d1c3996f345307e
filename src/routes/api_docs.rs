use crate::forms::ProductForm;
use crate::models::{Product, ProductStatus};
use actix_web::{get, web, Responder};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Product API", description = "CRUD for the product catalogue"),
    paths(
        crate::routes::product::get::list,
        crate::routes::product::get::item,
        crate::routes::product::add::add,
        crate::routes::product::update::item,
        crate::routes::product::delete::item,
    ),
    components(schemas(Product, ProductForm, ProductStatus)),
    tags((name = "Products", description = "Product endpoints"))
)]
pub struct ApiDoc;

#[tracing::instrument(name = "Get OpenAPI document.")]
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    web::Json(ApiDoc::openapi())
}
