pub mod pipeline;
pub mod schema;
