// Domain entities

pub mod api;
pub mod carbon_event;
pub mod config;
pub mod flight_leg;

pub use api::*;
pub use carbon_event::*;
pub use config::*;
pub use flight_leg::*;
