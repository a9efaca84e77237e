// Carbon event entity
// One recorded emission-causing activity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::CarbonEventType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonEvent {
    /// Unique identifier, assigned at creation and never changed.
    pub id: Uuid,
    /// Which activity class produced the emission.
    #[serde(rename = "type")]
    pub event_type: CarbonEventType,
    /// Calendar date the activity occurred. Time of day is not modeled.
    pub date: NaiveDate,
    /// Grams of CO2 attributed to the event.
    pub amount: u64,
}

impl CarbonEvent {
    /// Builds an event with a freshly generated id.
    pub fn new(event_type: CarbonEventType, date: NaiveDate, amount: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            date,
            amount,
        }
    }
}
