// Request and response shapes for the HTTP surface

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{CarbonEventType, TransportMethod};

/// Body of direct create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct CarbonEventPayload {
    #[serde(rename = "type")]
    pub event_type: CarbonEventType,
    pub date: NaiveDate,
    pub amount: u64,
}

/// Inclusive date range, `?start=YYYY-MM-DD&end=YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FlightQuery {
    pub passengers: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQuery {
    pub distance_value: f64,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuery {
    pub weight_value: f64,
    pub distance_value: f64,
    pub transport_method: TransportMethod,
}

/// One entry of the per-type aggregation. The response always carries
/// exactly one entry per `CarbonEventType`, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeSum {
    #[serde(rename = "type")]
    pub event_type: CarbonEventType,
    pub total: u64,
}
