pub mod catalog;
pub mod similarity;

pub use catalog::{Catalog, CatalogItem};
pub use similarity::SimilarityMatrix;
