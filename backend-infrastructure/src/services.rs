pub mod carbon_api;

pub use carbon_api::*;
