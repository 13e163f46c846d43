use std::fmt;

use serde::{Deserialize, Serialize};

/// Countries a listing can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "United States")]
    UnitedStates,
    Canada,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    Australia,
    Germany,
    France,
    Japan,
    India,
    Brazil,
    Italy,
    Spain,
    Netherlands,
    Switzerland,
    Sweden,
}

static ALL_COUNTRIES: &[Country] = &[
    Country::UnitedStates,
    Country::Canada,
    Country::UnitedKingdom,
    Country::Australia,
    Country::Germany,
    Country::France,
    Country::Japan,
    Country::India,
    Country::Brazil,
    Country::Italy,
    Country::Spain,
    Country::Netherlands,
    Country::Switzerland,
    Country::Sweden,
];

impl Country {
    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnitedStates => "United States",
            Self::Canada => "Canada",
            Self::UnitedKingdom => "United Kingdom",
            Self::Australia => "Australia",
            Self::Germany => "Germany",
            Self::France => "France",
            Self::Japan => "Japan",
            Self::India => "India",
            Self::Brazil => "Brazil",
            Self::Italy => "Italy",
            Self::Spain => "Spain",
            Self::Netherlands => "Netherlands",
            Self::Switzerland => "Switzerland",
            Self::Sweden => "Sweden",
        }
    }

    /// Returns all countries in selection order.
    pub fn all() -> &'static [Country] {
        ALL_COUNTRIES
    }

    /// Looks up a country by display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[mutants::skip]
impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_14_countries() {
        assert_eq!(Country::all().len(), 14);
        assert_eq!(Country::all().first(), Some(&Country::UnitedStates));
        assert_eq!(Country::all().last(), Some(&Country::Sweden));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            Country::from_name("united states"),
            Some(Country::UnitedStates)
        );
        assert_eq!(Country::from_name(" Japan "), Some(Country::Japan));
        assert_eq!(Country::from_name("Atlantis"), None);
    }

    #[test]
    fn serializes_as_display_name() {
        for country in Country::all() {
            let json = serde_json::to_string(country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.name()));
        }
    }
}
