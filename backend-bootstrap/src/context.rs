use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clickhouse::Client;

use backend_application::{AppState, Metrics};
use backend_domain::ports::CarbonEventRepository;
use backend_infrastructure::{AppConfig, CarbonInterfaceClient, ClickhouseEventRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let mut clickhouse = Client::default()
            .with_url(&db_config.clickhouse_url)
            .with_database(&db_config.clickhouse_database);
        if let Some(user) = &db_config.clickhouse_user {
            clickhouse = clickhouse.with_user(user);
        }
        if let Some(password) = &db_config.clickhouse_password {
            clickhouse = clickhouse.with_password(password);
        }

        let repo = Arc::new(ClickhouseEventRepo::new(
            clickhouse,
            db_config.clickhouse_database.clone(),
        ));
        repo.ensure_schema().await?;

        let estimator = Arc::new(CarbonInterfaceClient::new(
            runtime_config.carbon_api_url.clone(),
            runtime_config.carbon_api_key.clone(),
            Duration::from_secs(runtime_config.estimate_timeout_seconds),
        )?);

        let state = AppState {
            config: runtime_config,
            event_repo: repo,
            estimator,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
