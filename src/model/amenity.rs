use std::fmt;

use serde::{Deserialize, Serialize};

/// A feature offered by the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Parking,
    Pool,
    Gym,
    Ac,
    Heating,
    Kitchen,
    Tv,
    Washer,
    Dryer,
    Workspace,
    HotTub,
    Bbq,
    Breakfast,
    Fireplace,
}

static ALL_AMENITIES: &[Amenity] = &[
    Amenity::Wifi,
    Amenity::Parking,
    Amenity::Pool,
    Amenity::Gym,
    Amenity::Ac,
    Amenity::Heating,
    Amenity::Kitchen,
    Amenity::Tv,
    Amenity::Washer,
    Amenity::Dryer,
    Amenity::Workspace,
    Amenity::HotTub,
    Amenity::Bbq,
    Amenity::Breakfast,
    Amenity::Fireplace,
];

impl Amenity {
    /// Wire key (e.g. `hot_tub`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Parking => "parking",
            Self::Pool => "pool",
            Self::Gym => "gym",
            Self::Ac => "ac",
            Self::Heating => "heating",
            Self::Kitchen => "kitchen",
            Self::Tv => "tv",
            Self::Washer => "washer",
            Self::Dryer => "dryer",
            Self::Workspace => "workspace",
            Self::HotTub => "hot_tub",
            Self::Bbq => "bbq",
            Self::Breakfast => "breakfast",
            Self::Fireplace => "fireplace",
        }
    }

    /// Display label (e.g. `Hot Tub`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Wifi => "Wi-Fi",
            Self::Parking => "Free Parking",
            Self::Pool => "Swimming Pool",
            Self::Gym => "Gym",
            Self::Ac => "Air Conditioning",
            Self::Heating => "Heating",
            Self::Kitchen => "Kitchen",
            Self::Tv => "TV",
            Self::Washer => "Washer",
            Self::Dryer => "Dryer",
            Self::Workspace => "Dedicated Workspace",
            Self::HotTub => "Hot Tub",
            Self::Bbq => "BBQ Grill",
            Self::Breakfast => "Breakfast",
            Self::Fireplace => "Fireplace",
        }
    }

    /// Returns all amenities in display order.
    pub fn all() -> &'static [Amenity] {
        ALL_AMENITIES
    }
}

#[mutants::skip]
impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_15_amenities() {
        assert_eq!(Amenity::all().len(), 15);
    }

    #[test]
    fn serde_name_matches_key() {
        for amenity in Amenity::all() {
            let json = serde_json::to_string(amenity).unwrap();
            assert_eq!(json, format!("\"{}\"", amenity.key()));
        }
    }

    #[test]
    fn labels_differ_from_keys_where_expected() {
        assert_eq!(Amenity::HotTub.key(), "hot_tub");
        assert_eq!(Amenity::HotTub.label(), "Hot Tub");
        assert_eq!(Amenity::Ac.label(), "Air Conditioning");
    }
}
