// Test doubles for the domain ports

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use backend_domain::ports::{CarbonEstimator, CarbonEventRepository};
use backend_domain::{
    CarbonEvent, CarbonEventType, DistanceUnit, EstimateError, FlightLeg, RuntimeConfig,
    TransportMethod, WeightUnit,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryEventRepo {
    events: RwLock<HashMap<Uuid, CarbonEvent>>,
}

impl MemoryEventRepo {
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait]
impl CarbonEventRepository for MemoryEventRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<CarbonEvent>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CarbonEvent>> {
        Ok(self
            .events
            .read()
            .await
            .values()
            .filter(|event| event.date >= start && event.date <= end)
            .cloned()
            .collect())
    }

    async fn find_in_range_by_type(
        &self,
        event_type: CarbonEventType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CarbonEvent>> {
        Ok(self
            .events
            .read()
            .await
            .values()
            .filter(|event| {
                event.event_type == event_type && event.date >= start && event.date <= end
            })
            .cloned()
            .collect())
    }

    async fn save(&self, event: &CarbonEvent) -> anyhow::Result<()> {
        self.events.write().await.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.events.write().await.remove(&id);
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> anyhow::Result<()> {
        let mut events = self.events.write().await;
        for id in ids {
            events.remove(id);
        }
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Estimator answering every call with the same canned outcome.
pub enum StubEstimator {
    Grams(u64),
    NotFound(String),
    Upstream(String),
}

impl StubEstimator {
    fn outcome(&self) -> Result<u64, EstimateError> {
        match self {
            StubEstimator::Grams(grams) => Ok(*grams),
            StubEstimator::NotFound(what) => Err(EstimateError::NotFound(what.clone())),
            StubEstimator::Upstream(message) => Err(EstimateError::Upstream(message.clone())),
        }
    }
}

#[async_trait]
impl CarbonEstimator for StubEstimator {
    async fn estimate_flight(
        &self,
        _passengers: u32,
        _legs: &[FlightLeg],
    ) -> Result<u64, EstimateError> {
        self.outcome()
    }

    async fn estimate_vehicle(
        &self,
        _distance_value: f64,
        _distance_unit: DistanceUnit,
        _manufacturer: &str,
        _model: &str,
        _year: u16,
    ) -> Result<u64, EstimateError> {
        self.outcome()
    }

    async fn estimate_shipping(
        &self,
        _weight_value: f64,
        _weight_unit: WeightUnit,
        _distance_value: f64,
        _distance_unit: DistanceUnit,
        _transport_method: TransportMethod,
    ) -> Result<u64, EstimateError> {
        self.outcome()
    }
}

pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        carbon_api_url: "https://www.carboninterface.com/api/v1".to_string(),
        carbon_api_key: None,
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
        estimate_timeout_seconds: 5,
    }
}

pub fn test_state(repo: Arc<MemoryEventRepo>, estimator: StubEstimator) -> AppState {
    AppState {
        config: test_config(),
        event_repo: repo,
        estimator: Arc::new(estimator),
        metrics: Arc::new(Metrics::default()),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
