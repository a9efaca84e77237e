use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use clickhouse::{Client, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use backend_domain::ports::CarbonEventRepository;
use backend_domain::{CarbonEvent, CarbonEventType};

use crate::utils::{date_to_naive, naive_to_date};

const COLUMNS: &str = "id, event_type, event_date, amount, updated_at";

#[derive(Clone)]
pub struct ClickhouseEventRepo {
    client: Client,
    database: String,
}

/// Storage row. `updated_at` is the ReplacingMergeTree version column, so
/// the latest save wins when rows for the same id collapse.
#[derive(Debug, Clone, Serialize, Deserialize, Row)]
struct CarbonEventRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    event_type: String,
    #[serde(with = "clickhouse::serde::time::date")]
    event_date: time::Date,
    amount: u64,
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    updated_at: OffsetDateTime,
}

impl CarbonEventRow {
    fn from_event(event: &CarbonEvent) -> Result<Self> {
        Ok(Self {
            id: event.id,
            event_type: event.event_type.as_str().to_string(),
            event_date: naive_to_date(event.date)?,
            amount: event.amount,
            updated_at: OffsetDateTime::now_utc(),
        })
    }

    fn into_event(self) -> Result<CarbonEvent> {
        Ok(CarbonEvent {
            id: self.id,
            event_type: self.event_type.parse()?,
            date: date_to_naive(self.event_date)?,
            amount: self.amount,
        })
    }
}

impl ClickhouseEventRepo {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    async fn fetch_events(&self, query: &str) -> Result<Vec<CarbonEvent>> {
        let rows = self.client.query(query).fetch_all::<CarbonEventRow>().await?;
        rows.into_iter().map(CarbonEventRow::into_event).collect()
    }
}

#[async_trait]
impl CarbonEventRepository for ClickhouseEventRepo {
    async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;

        let create_events = r#"
CREATE TABLE IF NOT EXISTS carbon_events (
    id UUID,
    event_type String,
    event_date Date,
    amount UInt64,
    updated_at DateTime64(3)
) ENGINE = ReplacingMergeTree(updated_at)
ORDER BY id
"#;
        self.client.query(create_events).execute().await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<CarbonEvent>> {
        let query = format!(
            "SELECT {} FROM carbon_events FINAL WHERE id = '{}' LIMIT 1",
            COLUMNS, id
        );
        let row = self
            .client
            .query(&query)
            .fetch_optional::<CarbonEventRow>()
            .await?;
        row.map(CarbonEventRow::into_event).transpose()
    }

    async fn find_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CarbonEvent>> {
        let query = format!(
            "SELECT {} FROM carbon_events FINAL \
             WHERE event_date >= toDate('{}') AND event_date <= toDate('{}') \
             ORDER BY event_date, id",
            COLUMNS, start, end
        );
        self.fetch_events(&query).await
    }

    async fn find_in_range_by_type(
        &self,
        event_type: CarbonEventType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CarbonEvent>> {
        let query = format!(
            "SELECT {} FROM carbon_events FINAL \
             WHERE event_type = '{}' AND event_date >= toDate('{}') AND event_date <= toDate('{}') \
             ORDER BY event_date, id",
            COLUMNS,
            event_type.as_str(),
            start,
            end
        );
        self.fetch_events(&query).await
    }

    async fn save(&self, event: &CarbonEvent) -> Result<()> {
        let mut insert = self.client.insert("carbon_events")?;
        insert.write(&CarbonEventRow::from_event(event)?).await?;
        insert.end().await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let query = format!("DELETE FROM carbon_events WHERE id = '{}'", id);
        self.client.query(&query).execute().await?;
        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let id_list = ids
            .iter()
            .map(|id| format!("'{}'", id))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!("DELETE FROM carbon_events WHERE id IN ({})", id_list);
        self.client.query(&query).execute().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.client.query("SELECT 1").fetch_one::<u8>().await?;
        Ok(())
    }
}
