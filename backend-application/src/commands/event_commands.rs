use tracing::error;
use uuid::Uuid;

use backend_domain::{CarbonEvent, CarbonEventPayload, DateRangeQuery};

use crate::queries::event_queries;
use crate::{AppError, AppState};

pub async fn create_event(
    state: &AppState,
    payload: CarbonEventPayload,
) -> Result<CarbonEvent, AppError> {
    let event = CarbonEvent::new(payload.event_type, payload.date, payload.amount);
    state.event_repo.save(&event).await.map_err(|err| {
        error!("failed to persist carbon event: {}", err);
        AppError::Internal(err)
    })?;
    state.metrics.record_created();
    Ok(event)
}

/// Overwrites type, date and amount in place. The id never changes.
pub async fn update_event(
    state: &AppState,
    id: Uuid,
    payload: CarbonEventPayload,
) -> Result<CarbonEvent, AppError> {
    let mut event = event_queries::get_event(state, id).await?;
    event.event_type = payload.event_type;
    event.date = payload.date;
    event.amount = payload.amount;
    state.event_repo.save(&event).await.map_err(|err| {
        error!("failed to update carbon event {}: {}", id, err);
        AppError::Internal(err)
    })?;
    Ok(event)
}

pub async fn delete_event(state: &AppState, id: Uuid) -> Result<(), AppError> {
    state.event_repo.delete_by_id(id).await.map_err(|err| {
        error!("failed to delete carbon event {}: {}", id, err);
        AppError::Internal(err)
    })?;
    state.metrics.record_deleted(1);
    Ok(())
}

/// Deletes exactly the set `list_in_range` returns for the same bounds.
pub async fn delete_in_range(state: &AppState, range: DateRangeQuery) -> Result<(), AppError> {
    let events = event_queries::list_in_range(state, range).await?;
    if events.is_empty() {
        return Ok(());
    }
    let ids: Vec<Uuid> = events.iter().map(|event| event.id).collect();
    state.event_repo.delete_many(&ids).await.map_err(|err| {
        error!("failed to delete carbon events in range: {}", err);
        AppError::Internal(err)
    })?;
    state.metrics.record_deleted(ids.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use backend_domain::CarbonEventType;

    use super::*;
    use crate::test_util::{date, test_state, MemoryEventRepo, StubEstimator};

    fn payload(event_type: CarbonEventType, day: chrono::NaiveDate, amount: u64) -> CarbonEventPayload {
        CarbonEventPayload {
            event_type,
            date: day,
            amount,
        }
    }

    #[tokio::test]
    async fn created_events_round_trip_with_fresh_ids() {
        let state = test_state(Arc::new(MemoryEventRepo::default()), StubEstimator::Grams(0));
        let first = create_event(&state, payload(CarbonEventType::Flight, date(2024, 1, 1), 100))
            .await
            .expect("create");
        let second = create_event(&state, payload(CarbonEventType::Flight, date(2024, 1, 1), 100))
            .await
            .expect("create");
        assert_ne!(first.id, second.id);

        let loaded = event_queries::get_event(&state, first.id).await.expect("get");
        assert_eq!(loaded, first);
        assert_eq!(loaded.event_type, CarbonEventType::Flight);
        assert_eq!(loaded.amount, 100);
    }

    #[tokio::test]
    async fn update_fails_for_unknown_id() {
        let state = test_state(Arc::new(MemoryEventRepo::default()), StubEstimator::Grams(0));
        let err = update_event(
            &state,
            Uuid::new_v4(),
            payload(CarbonEventType::Car, date(2024, 3, 1), 10),
        )
        .await
        .expect_err("absent");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_keeps_the_id() {
        let state = test_state(Arc::new(MemoryEventRepo::default()), StubEstimator::Grams(0));
        let created = create_event(&state, payload(CarbonEventType::Flight, date(2024, 1, 1), 100))
            .await
            .expect("create");

        let updated = update_event(
            &state,
            created.id,
            payload(CarbonEventType::Shipping, date(2024, 6, 15), 42),
        )
        .await
        .expect("update");
        assert_eq!(updated.id, created.id);

        let loaded = event_queries::get_event(&state, created.id).await.expect("get");
        assert_eq!(loaded.event_type, CarbonEventType::Shipping);
        assert_eq!(loaded.date, date(2024, 6, 15));
        assert_eq!(loaded.amount, 42);
    }

    #[tokio::test]
    async fn deleted_events_are_gone() {
        let state = test_state(Arc::new(MemoryEventRepo::default()), StubEstimator::Grams(0));
        let created = create_event(&state, payload(CarbonEventType::Car, date(2024, 1, 1), 5))
            .await
            .expect("create");

        delete_event(&state, created.id).await.expect("delete");
        let err = event_queries::get_event(&state, created.id)
            .await
            .expect_err("gone");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_in_range_spares_events_outside_the_range() {
        let repo = Arc::new(MemoryEventRepo::default());
        let state = test_state(repo.clone(), StubEstimator::Grams(0));
        create_event(&state, payload(CarbonEventType::Flight, date(2024, 1, 1), 100))
            .await
            .expect("create");
        create_event(&state, payload(CarbonEventType::Car, date(2024, 1, 5), 200))
            .await
            .expect("create");
        let outside = create_event(&state, payload(CarbonEventType::Shipping, date(2024, 2, 1), 50))
            .await
            .expect("create");

        delete_in_range(
            &state,
            DateRangeQuery {
                start: date(2024, 1, 1),
                end: date(2024, 1, 31),
            },
        )
        .await
        .expect("delete range");

        assert_eq!(repo.len().await, 1);
        let survivor = event_queries::get_event(&state, outside.id).await.expect("get");
        assert_eq!(survivor.amount, 50);
    }
}
