//! Input checks and result ordering for trip search.

use std::cmp::Ordering;

use crate::types::Trip;

/// Airports accepted as `origin` / `destination`.
pub const AIRPORT_CODES: [&str; 50] = [
    "ATL", "PEK", "LAX", "DXB", "HND", "ORD", "LHR", "PVG", "CDG", "DFW",
    "AMS", "FRA", "IST", "CAN", "JFK", "SIN", "DEN", "ICN", "BKK", "SFO",
    "LAS", "CLT", "MIA", "KUL", "SEA", "MUC", "EWR", "MAD", "HKG", "MCO",
    "PHX", "IAH", "SYD", "MEL", "GRU", "YYZ", "LGW", "BCN", "MAN", "BOM",
    "DEL", "ZRH", "SVO", "DME", "JNB", "ARN", "OSL", "CPH", "HEL", "VIE",
];

/// Exact, case-sensitive membership in [`AIRPORT_CODES`].
pub fn is_valid_iata(code: &str) -> bool {
    AIRPORT_CODES.contains(&code)
}

pub fn is_valid_sort_key(key: &str) -> bool {
    SortOrder::parse(key).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Cheapest,
    Fastest,
}

impl SortOrder {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "cheapest" => Some(Self::Cheapest),
            "fastest" => Some(Self::Fastest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cheapest => "cheapest",
            Self::Fastest => "fastest",
        }
    }

    pub fn apply(self, trips: &mut [Trip]) {
        match self {
            Self::Cheapest => sort_by_cheapest(trips),
            Self::Fastest => sort_by_fastest(trips),
        }
    }
}

/// Ascending by duration; ties keep their upstream order.
pub fn sort_by_fastest(trips: &mut [Trip]) {
    trips.sort_by(|a, b| compare(a.duration, b.duration));
}

/// Ascending by cost; ties keep their upstream order.
pub fn sort_by_cheapest(trips: &mut [Trip]) {
    trips.sort_by(|a, b| compare(a.cost, b.cost));
}

fn compare(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
