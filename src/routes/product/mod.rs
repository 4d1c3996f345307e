pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use crate::helpers::{JsonResponse, JsonResponseBuilder};
use crate::models::Product;
use crate::services::ProductError;

/// Maps a failed operation onto its envelope. `invalid` shapes the 422 body,
/// which differs between create (`[]`) and update (`{}`).
pub(crate) fn reject(err: ProductError, invalid: JsonResponseBuilder<Product>) -> actix_web::Error {
    let message = err.to_string();
    match err {
        ProductError::Empty | ProductError::NotFound => {
            JsonResponse::<Product>::build().not_found(message)
        }
        ProductError::Validation(errors) => invalid.set_errors(errors.fields).form_error(message),
        ProductError::Normalization(_) | ProductError::Database(_) => {
            tracing::error!("Product operation failed: {}", message);
            JsonResponse::<Product>::build().internal_server_error(message)
        }
    }
}
