use std::sync::Arc;

use backend_domain::ports::{CarbonEstimator, CarbonEventRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn CarbonEventRepository>,
    pub estimator: Arc<dyn CarbonEstimator>,
    pub metrics: Arc<Metrics>,
}
