// Flight leg value type
// Estimation input only, never persisted

use serde::{Deserialize, Serialize};

use crate::value_objects::CabinClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub departure_airport: String,
    pub destination_airport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_class: Option<CabinClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabin_class_is_omitted_when_absent() {
        let leg = FlightLeg {
            departure_airport: "DRS".to_string(),
            destination_airport: "FRA".to_string(),
            cabin_class: None,
        };
        let value = serde_json::to_value(&leg).expect("serialize");
        assert!(value.get("cabin_class").is_none());
        assert_eq!(value["departure_airport"], "DRS");
    }

    #[test]
    fn cabin_class_serializes_lowercase() {
        let leg = FlightLeg {
            departure_airport: "FRA".to_string(),
            destination_airport: "JFK".to_string(),
            cabin_class: Some(CabinClass::Premium),
        };
        let value = serde_json::to_value(&leg).expect("serialize");
        assert_eq!(value["cabin_class"], "premium");
    }
}
