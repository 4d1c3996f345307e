pub mod api_docs;
pub mod health_checks;
pub mod product;

pub use api_docs::*;
pub use health_checks::*;
