use crate::types::Coordinate;

// --- Location ---------------------------------------------------------------

/// Immutable geographic point. Serialized with the short keys `lat`/`lon`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    latitude: Coordinate,
    #[serde(rename = "lon")]
    longitude: Coordinate,
}

impl Location {
    pub const fn new(latitude: Coordinate, longitude: Coordinate) -> Self {
        Location { latitude, longitude }
    }

    pub const fn latitude(&self) -> Coordinate {
        self.latitude
    }

    pub const fn longitude(&self) -> Coordinate {
        self.longitude
    }
}

impl From<(Coordinate, Coordinate)> for Location {
    fn from((latitude, longitude): (Coordinate, Coordinate)) -> Self {
        Location::new(latitude, longitude)
    }
}

// Note: a track is an ordered path. Nothing here sorts, dedups or otherwise
// normalizes a sequence of locations, and nothing derives a distance from it.
