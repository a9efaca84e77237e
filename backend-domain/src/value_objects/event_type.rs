// Carbon event type value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Activity class that produced an emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarbonEventType {
    Flight,
    Car,
    Shipping,
}

impl CarbonEventType {
    /// Fixed iteration order for enum-keyed aggregation.
    pub const ALL: [CarbonEventType; 3] = [
        CarbonEventType::Flight,
        CarbonEventType::Car,
        CarbonEventType::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarbonEventType::Flight => "FLIGHT",
            CarbonEventType::Car => "CAR",
            CarbonEventType::Shipping => "SHIPPING",
        }
    }
}

impl fmt::Display for CarbonEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarbonEventType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLIGHT" => Ok(CarbonEventType::Flight),
            "CAR" => Ok(CarbonEventType::Car),
            "SHIPPING" => Ok(CarbonEventType::Shipping),
            other => Err(anyhow::anyhow!("unknown carbon event type '{}'", other)),
        }
    }
}
