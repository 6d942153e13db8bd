pub mod apply;
pub mod defaults;
pub mod schema;
pub mod validate;
