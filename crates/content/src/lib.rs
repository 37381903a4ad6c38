#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod source;

pub use error::ContentError;
pub use record::{CatalogRecord, parse_catalog};
pub use source::{BundledCatalog, CatalogSource, JsonFileCatalog};
