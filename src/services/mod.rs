pub mod product;

pub use product::{ProductError, ProductService};
