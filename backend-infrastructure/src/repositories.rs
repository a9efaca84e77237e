pub mod clickhouse_events;

pub use clickhouse_events::*;
