pub mod catalog_search;

pub use catalog_search::{CatalogSearch, CatalogSearchResult};

#[cfg(test)]
pub use catalog_search::MockCatalogSearch;
