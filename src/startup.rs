use crate::helpers::JsonResponse;
use crate::models::Product;
use crate::routes;
use crate::services::{ProductError, ProductService};
use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, pg_pool: Pool<Postgres>) -> Result<Server, std::io::Error> {
    let product_service = web::Data::new(ProductService::new(pg_pool));

    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected path: {}", err);
        JsonResponse::<Product>::build().not_found(ProductError::NotFound.to_string())
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/api-docs").service(routes::openapi_json))
            .service(
                web::scope("/api/products")
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::add::add)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .app_data(path_config.clone())
            .app_data(product_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
