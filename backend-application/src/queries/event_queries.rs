use tracing::error;
use uuid::Uuid;

use backend_domain::{CarbonEvent, CarbonEventType, DateRangeQuery, TypeSum};

use crate::{AppError, AppState};

pub async fn get_event(state: &AppState, id: Uuid) -> Result<CarbonEvent, AppError> {
    let event = state.event_repo.get(id).await.map_err(|err| {
        error!("failed to load carbon event {}: {}", id, err);
        AppError::Internal(err)
    })?;
    event.ok_or_else(|| AppError::NotFound(format!("carbon event {}", id)))
}

/// Events with `start <= date <= end`. A reversed range is empty, not an
/// error.
pub async fn list_in_range(
    state: &AppState,
    range: DateRangeQuery,
) -> Result<Vec<CarbonEvent>, AppError> {
    if range.start > range.end {
        return Ok(Vec::new());
    }
    state
        .event_repo
        .find_in_range(range.start, range.end)
        .await
        .map_err(|err| {
            error!("failed to query carbon events: {}", err);
            AppError::Internal(err)
        })
}

pub async fn accumulate_in_range(
    state: &AppState,
    range: DateRangeQuery,
) -> Result<u64, AppError> {
    let events = list_in_range(state, range).await?;
    Ok(events.iter().map(|event| event.amount).sum())
}

/// One `(type, sum)` entry per variant, in `CarbonEventType::ALL` order,
/// zero for types without matching events.
pub async fn accumulate_by_type(
    state: &AppState,
    range: DateRangeQuery,
) -> Result<Vec<TypeSum>, AppError> {
    let mut sums = Vec::with_capacity(CarbonEventType::ALL.len());
    for event_type in CarbonEventType::ALL {
        let total = if range.start > range.end {
            0
        } else {
            state
                .event_repo
                .find_in_range_by_type(event_type, range.start, range.end)
                .await
                .map_err(|err| {
                    error!("failed to query {} carbon events: {}", event_type, err);
                    AppError::Internal(err)
                })?
                .iter()
                .map(|event| event.amount)
                .sum()
        };
        sums.push(TypeSum { event_type, total });
    }
    Ok(sums)
}
