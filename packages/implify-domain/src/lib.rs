pub mod matcher;
pub mod normalize;
pub mod product;
pub mod query;
pub mod scorer;

pub use product::Product;
pub use query::{QueryField, SearchQuery};
