pub mod dto;
pub mod query_type;

pub use dto::*;
pub use query_type::QueryType;
