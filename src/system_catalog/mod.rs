// INFORMATION_SCHEMA relations and the catalog that assembles them.

pub mod catalog;
pub mod information_schema;
pub mod metadata;
pub mod names;
pub mod registry;
pub mod shared;
pub mod value;
pub mod view_table;

pub use catalog::{BuildContext, CatalogHandle, InformationSchemaCatalog};
pub use metadata::SelfDescription;
pub use value::{Row, Value};
pub use view_table::ViewTable;
