pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod system_catalog;
pub mod tools;

pub use error::{CatalogError, CatalogResult};
pub use schema::{load_schema, Schema, SchemaDef};
pub use system_catalog::{CatalogHandle, InformationSchemaCatalog, SelfDescription, ViewTable};
