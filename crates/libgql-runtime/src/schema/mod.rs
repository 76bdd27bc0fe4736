mod build_error;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use build_error::SchemaBuildError;
pub use schema::Schema;
pub use schema::SchemaConfig;

pub(crate) use build_error::name_config_error;
pub(crate) use build_error::valid_name_error;
pub(crate) use schema_builder::SchemaBuilder;
