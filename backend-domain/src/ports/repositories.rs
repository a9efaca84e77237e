use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::CarbonEvent;
use crate::value_objects::CarbonEventType;

#[async_trait]
pub trait CarbonEventRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<CarbonEvent>>;
    /// Both bounds inclusive. Date comparison only, independent of type.
    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CarbonEvent>>;
    async fn find_in_range_by_type(
        &self,
        event_type: CarbonEventType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<CarbonEvent>>;
    /// Insert when the id is new, overwrite when it already exists.
    async fn save(&self, event: &CarbonEvent) -> anyhow::Result<()>;
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
    async fn delete_many(&self, ids: &[Uuid]) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}
