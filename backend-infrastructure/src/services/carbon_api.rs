// Typed client for the carboninterface.com estimation API
// One-shot calls, bearer auth on every request, no retry

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use backend_domain::ports::CarbonEstimator;
use backend_domain::{DistanceUnit, EstimateError, FlightLeg, TransportMethod, WeightUnit};

pub struct CarbonInterfaceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CarbonInterfaceClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn bearer(&self) -> Result<String, EstimateError> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            EstimateError::Upstream("carbon api key not configured".to_string())
        })?;
        Ok(format!("Bearer {}", key))
    }

    async fn post_estimate(&self, payload: serde_json::Value) -> Result<u64, EstimateError> {
        let url = format!("{}/estimates", self.base_url);
        debug!("requesting carbon estimate: {}", payload["type"]);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.bearer()?)
            .json(&payload)
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?;
        let body: EstimateResponse = response.json().await.map_err(upstream)?;
        Ok(body.data.attributes.carbon_g)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EstimateError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.bearer()?)
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?;
        response.json().await.map_err(upstream)
    }

    /// Two sequential lookups: make name to make id, then model name and
    /// year to model id. Each is an exact-match scan over the full remote
    /// listing.
    async fn resolve_vehicle_model(
        &self,
        manufacturer: &str,
        model: &str,
        year: u16,
    ) -> Result<String, EstimateError> {
        let makes: Vec<VehicleMake> = self
            .get_json(&format!("{}/vehicle_makes", self.base_url))
            .await?;
        let make_id = find_make_id(&makes, manufacturer).ok_or_else(|| {
            EstimateError::NotFound(format!("vehicle make '{}'", manufacturer))
        })?;

        let models: Vec<VehicleModel> = self
            .get_json(&format!(
                "{}/vehicle_makes/{}/vehicle_models",
                self.base_url, make_id
            ))
            .await?;
        let model_id = find_model_id(&models, model, year).ok_or_else(|| {
            EstimateError::NotFound(format!("vehicle model '{}' ({})", model, year))
        })?;
        Ok(model_id.to_string())
    }
}

#[async_trait]
impl CarbonEstimator for CarbonInterfaceClient {
    async fn estimate_flight(
        &self,
        passengers: u32,
        legs: &[FlightLeg],
    ) -> Result<u64, EstimateError> {
        self.post_estimate(flight_payload(passengers, legs)).await
    }

    async fn estimate_vehicle(
        &self,
        distance_value: f64,
        distance_unit: DistanceUnit,
        manufacturer: &str,
        model: &str,
        year: u16,
    ) -> Result<u64, EstimateError> {
        let model_id = self.resolve_vehicle_model(manufacturer, model, year).await?;
        self.post_estimate(vehicle_payload(distance_value, distance_unit, &model_id))
            .await
    }

    async fn estimate_shipping(
        &self,
        weight_value: f64,
        weight_unit: WeightUnit,
        distance_value: f64,
        distance_unit: DistanceUnit,
        transport_method: TransportMethod,
    ) -> Result<u64, EstimateError> {
        self.post_estimate(shipping_payload(
            weight_value,
            weight_unit,
            distance_value,
            distance_unit,
            transport_method,
        ))
        .await
    }
}

fn upstream(err: reqwest::Error) -> EstimateError {
    EstimateError::Upstream(err.to_string())
}

fn flight_payload(passengers: u32, legs: &[FlightLeg]) -> serde_json::Value {
    json!({
        "type": "flight",
        "passengers": passengers,
        "legs": legs,
    })
}

fn vehicle_payload(
    distance_value: f64,
    distance_unit: DistanceUnit,
    vehicle_model_id: &str,
) -> serde_json::Value {
    json!({
        "type": "vehicle",
        "distance_value": distance_value,
        "distance_unit": distance_unit.as_str(),
        "vehicle_model_id": vehicle_model_id,
    })
}

fn shipping_payload(
    weight_value: f64,
    weight_unit: WeightUnit,
    distance_value: f64,
    distance_unit: DistanceUnit,
    transport_method: TransportMethod,
) -> serde_json::Value {
    json!({
        "type": "shipping",
        "weight_value": weight_value,
        "weight_unit": weight_unit.as_str(),
        "distance_value": distance_value,
        "distance_unit": distance_unit.as_str(),
        "transport_method": transport_method.as_str(),
    })
}

/// Case-sensitive exact match over the make listing.
fn find_make_id<'a>(makes: &'a [VehicleMake], name: &str) -> Option<&'a str> {
    makes
        .iter()
        .find(|make| make.data.attributes.name == name)
        .map(|make| make.data.id.as_str())
}

/// Case-sensitive exact match on model name and year.
fn find_model_id<'a>(models: &'a [VehicleModel], name: &str, year: u16) -> Option<&'a str> {
    models
        .iter()
        .find(|model| model.data.attributes.name == name && model.data.attributes.year == year)
        .map(|model| model.data.id.as_str())
}

#[derive(Debug, Deserialize)]
struct EstimateResponse {
    data: EstimateData,
}

#[derive(Debug, Deserialize)]
struct EstimateData {
    attributes: EstimateAttributes,
}

/// The service reports the same figure in four units plus a timestamp;
/// only the grams figure is consumed.
#[derive(Debug, Deserialize)]
struct EstimateAttributes {
    carbon_g: u64,
    #[allow(dead_code)]
    carbon_lb: f64,
    #[allow(dead_code)]
    carbon_kg: f64,
    #[allow(dead_code)]
    carbon_mt: f64,
    #[allow(dead_code)]
    estimated_at: String,
}

#[derive(Debug, Deserialize)]
struct VehicleMake {
    data: VehicleMakeData,
}

#[derive(Debug, Deserialize)]
struct VehicleMakeData {
    id: String,
    attributes: VehicleMakeAttributes,
}

#[derive(Debug, Deserialize)]
struct VehicleMakeAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct VehicleModel {
    data: VehicleModelData,
}

#[derive(Debug, Deserialize)]
struct VehicleModelData {
    id: String,
    attributes: VehicleModelAttributes,
}

#[derive(Debug, Deserialize)]
struct VehicleModelAttributes {
    name: String,
    year: u16,
}
