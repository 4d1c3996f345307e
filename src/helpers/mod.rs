pub mod date;
pub(crate) mod json;

pub use json::*;
