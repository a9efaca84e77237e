pub mod event_queries;

pub use event_queries::*;
