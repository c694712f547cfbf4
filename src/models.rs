use std::fmt::Formatter;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A surveyed house number: the number as printed on the building,
/// the street it belongs to, and its position in decimal degrees.
///
/// `number` is textual on purpose, to keep formats like "12A", "4-6"
/// or "221B" intact. No field is validated: empty strings and
/// out-of-range coordinates are stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseNumber {
    pub number: String,
    pub street: String,
    pub lat: f64,
    pub lon: f64,
}

impl HouseNumber {
    pub fn new(number: String, street: String, lat: f64, lon: f64) -> HouseNumber {
        HouseNumber { number, street, lat, lon }
    }
}

// Coordinates compare and hash by bit pattern: NaN equals NaN,
// 0.0 and -0.0 differ. Eq and Hash stay consistent.
impl PartialEq for HouseNumber {
    fn eq(&self, other: &HouseNumber) -> bool {
        self.number == other.number
            && self.street == other.street
            && self.lat.to_bits() == other.lat.to_bits()
            && self.lon.to_bits() == other.lon.to_bits()
    }
}

impl Eq for HouseNumber {}

impl Hash for HouseNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.street.hash(state);
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl std::fmt::Display for HouseNumber {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} {} ({}, {})", self.number, self.street, self.lat, self.lon)
    }
}
