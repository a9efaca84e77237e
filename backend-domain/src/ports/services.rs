use async_trait::async_trait;
use thiserror::Error;

use crate::entities::FlightLeg;
use crate::value_objects::{DistanceUnit, TransportMethod, WeightUnit};

#[derive(Debug, Error)]
pub enum EstimateError {
    /// A make or model name did not resolve against the remote listing.
    #[error("not found: {0}")]
    NotFound(String),
    /// The estimation service call failed or returned no usable body.
    #[error("estimation service: {0}")]
    Upstream(String),
}

/// Boundary to the external carbon-estimation service. Every call is a
/// one-shot outbound request with no retry.
#[async_trait]
pub trait CarbonEstimator: Send + Sync {
    /// Estimated grams of CO2 for a multi-leg flight.
    async fn estimate_flight(
        &self,
        passengers: u32,
        legs: &[FlightLeg],
    ) -> Result<u64, EstimateError>;

    /// Estimated grams of CO2 for a vehicle trip. Resolves manufacturer
    /// and model names against the remote listings before estimating,
    /// so every call costs three round trips.
    async fn estimate_vehicle(
        &self,
        distance_value: f64,
        distance_unit: DistanceUnit,
        manufacturer: &str,
        model: &str,
        year: u16,
    ) -> Result<u64, EstimateError>;

    /// Estimated grams of CO2 for a shipment.
    async fn estimate_shipping(
        &self,
        weight_value: f64,
        weight_unit: WeightUnit,
        distance_value: f64,
        distance_unit: DistanceUnit,
        transport_method: TransportMethod,
    ) -> Result<u64, EstimateError>;
}
