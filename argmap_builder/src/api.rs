mod registry;
mod schema;

pub use registry::*;
pub use schema::*;
