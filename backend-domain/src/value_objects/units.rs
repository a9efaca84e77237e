// Unit value objects for estimation requests
// Wire names follow the estimation service's vocabulary

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Mi => "mi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMethod {
    Ship,
    Train,
    Truck,
    Plane,
}

impl TransportMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMethod::Ship => "ship",
            TransportMethod::Train => "train",
            TransportMethod::Truck => "truck",
            TransportMethod::Plane => "plane",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Premium,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Km).expect("serialize"),
            "\"km\""
        );
        assert_eq!(
            serde_json::to_string(&WeightUnit::Lb).expect("serialize"),
            "\"lb\""
        );
        let method: TransportMethod =
            serde_json::from_str("\"truck\"").expect("deserialize");
        assert_eq!(method, TransportMethod::Truck);
    }

    #[test]
    fn unknown_transport_method_is_rejected() {
        assert!(serde_json::from_str::<TransportMethod>("\"teleport\"").is_err());
    }
}
