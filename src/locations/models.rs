use crate::locations::consts::SCALAR_E7;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocationRecord {
    pub latitude_e7: i64,
    pub longitude_e7: i64,
}

impl RawLocationRecord {
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude_e7 as f64 * SCALAR_E7,
            lon: self.longitude_e7 as f64 * SCALAR_E7,
        }
    }
}

/// Location history export. Only `locations` is read, everything else in the file is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationFile {
    pub locations: Vec<RawLocationRecord>,
}

/// Decimal degrees. Serialized as `[lat, lon]`, the shape heat layers consume.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lat, coordinate.lon]
    }
}
