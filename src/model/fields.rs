use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::amenity::Amenity;
use super::country::Country;
use super::field::FieldId;
use super::pet::PetFeeType;

/// Errors produced when updating a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("{field} does not accept a {given} value")]
    KindMismatch {
        field: FieldId,
        given: &'static str,
    },
}

/// A typed value for a single field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Country(Option<Country>),
    PetFeeType(Option<PetFeeType>),
    Amenities(BTreeSet<Amenity>),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Country(_) => "country",
            Self::PetFeeType(_) => "pet fee type",
            Self::Amenities(_) => "amenities",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Country> for FieldValue {
    fn from(value: Country) -> Self {
        Self::Country(Some(value))
    }
}

impl From<PetFeeType> for FieldValue {
    fn from(value: PetFeeType) -> Self {
        Self::PetFeeType(Some(value))
    }
}

impl From<BTreeSet<Amenity>> for FieldValue {
    fn from(value: BTreeSet<Amenity>) -> Self {
        Self::Amenities(value)
    }
}

/// The complete set of user-editable attributes for one listing draft.
///
/// Numeric fields hold raw text; parsing happens when a
/// [`ListingSnapshot`](crate::submit::ListingSnapshot) is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    title: String,
    description: String,
    address: String,
    city: String,
    state: String,
    country: Option<Country>,
    zip_code: String,
    price_per_month: String,
    cleaning_fee: String,
    service_fee: String,
    bedrooms: String,
    bathrooms: String,
    beds: String,
    square_feet: String,
    amenities: BTreeSet<Amenity>,
    pets_allowed: bool,
    pet_fee_type: Option<PetFeeType>,
    pet_fee_amount: String,
    pet_monthly_fee: String,
    pet_nightly_fee: String,
}

impl FormFields {
    /// Returns a copy with `id` replaced by `value`; every other field is unchanged.
    ///
    /// Turning `PetsAllowed` off also clears the fee type and all three fee
    /// amounts. A value of the wrong kind for `id` is rejected and the draft
    /// is left as it was.
    pub fn with(&self, id: FieldId, value: FieldValue) -> Result<Self, UpdateError> {
        let mut next = self.clone();
        match (id, value) {
            (FieldId::Country, FieldValue::Country(country)) => next.country = country,
            (FieldId::PetFeeType, FieldValue::PetFeeType(fee_type)) => {
                next.pet_fee_type = fee_type;
            }
            (FieldId::Amenities, FieldValue::Amenities(amenities)) => next.amenities = amenities,
            (FieldId::PetsAllowed, FieldValue::Flag(allowed)) => {
                next.pets_allowed = allowed;
                if !allowed {
                    next.pet_fee_type = None;
                    next.pet_fee_amount.clear();
                    next.pet_monthly_fee.clear();
                    next.pet_nightly_fee.clear();
                }
            }
            (id, FieldValue::Text(text)) => match next.text_slot_mut(id) {
                Some(slot) => *slot = text,
                None => {
                    return Err(UpdateError::KindMismatch {
                        field: id,
                        given: "text",
                    });
                }
            },
            (id, value) => {
                return Err(UpdateError::KindMismatch {
                    field: id,
                    given: value.kind_name(),
                });
            }
        }
        debug!(field = %id, "field updated");
        Ok(next)
    }

    /// Returns the current value of `id` as a [`FieldValue`].
    pub fn value(&self, id: FieldId) -> FieldValue {
        match id {
            FieldId::Country => FieldValue::Country(self.country),
            FieldId::PetFeeType => FieldValue::PetFeeType(self.pet_fee_type),
            FieldId::Amenities => FieldValue::Amenities(self.amenities.clone()),
            FieldId::PetsAllowed => FieldValue::Flag(self.pets_allowed),
            _ => FieldValue::Text(self.text(id).unwrap_or_default().to_string()),
        }
    }

    /// Returns the raw text of a text or numeric field, or `None` for other kinds.
    pub fn text(&self, id: FieldId) -> Option<&str> {
        let text = match id {
            FieldId::Title => &self.title,
            FieldId::Description => &self.description,
            FieldId::Address => &self.address,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::ZipCode => &self.zip_code,
            FieldId::PricePerMonth => &self.price_per_month,
            FieldId::CleaningFee => &self.cleaning_fee,
            FieldId::ServiceFee => &self.service_fee,
            FieldId::Bedrooms => &self.bedrooms,
            FieldId::Bathrooms => &self.bathrooms,
            FieldId::Beds => &self.beds,
            FieldId::SquareFeet => &self.square_feet,
            FieldId::PetFeeAmount => &self.pet_fee_amount,
            FieldId::PetMonthlyFee => &self.pet_monthly_fee,
            FieldId::PetNightlyFee => &self.pet_nightly_fee,
            FieldId::Country | FieldId::Amenities | FieldId::PetsAllowed | FieldId::PetFeeType => {
                return None;
            }
        };
        Some(text.as_str())
    }

    fn text_slot_mut(&mut self, id: FieldId) -> Option<&mut String> {
        let slot = match id {
            FieldId::Title => &mut self.title,
            FieldId::Description => &mut self.description,
            FieldId::Address => &mut self.address,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::ZipCode => &mut self.zip_code,
            FieldId::PricePerMonth => &mut self.price_per_month,
            FieldId::CleaningFee => &mut self.cleaning_fee,
            FieldId::ServiceFee => &mut self.service_fee,
            FieldId::Bedrooms => &mut self.bedrooms,
            FieldId::Bathrooms => &mut self.bathrooms,
            FieldId::Beds => &mut self.beds,
            FieldId::SquareFeet => &mut self.square_feet,
            FieldId::PetFeeAmount => &mut self.pet_fee_amount,
            FieldId::PetMonthlyFee => &mut self.pet_monthly_fee,
            FieldId::PetNightlyFee => &mut self.pet_nightly_fee,
            FieldId::Country | FieldId::Amenities | FieldId::PetsAllowed | FieldId::PetFeeType => {
                return None;
            }
        };
        Some(slot)
    }

    /// Returns `true` if the field counts as unset for the required rule.
    ///
    /// Only empty text is blank; whitespace counts as a value. An unchecked
    /// flag is blank.
    pub fn is_blank(&self, id: FieldId) -> bool {
        match id {
            FieldId::Country => self.country.is_none(),
            FieldId::PetFeeType => self.pet_fee_type.is_none(),
            FieldId::Amenities => self.amenities.is_empty(),
            FieldId::PetsAllowed => !self.pets_allowed,
            _ => self.text(id).is_none_or(str::is_empty),
        }
    }

    /// Returns `true` if the field currently accepts input.
    ///
    /// The fee type is only editable when pets are allowed, and each fee
    /// amount only when its own fee type is selected.
    pub fn is_enabled(&self, id: FieldId) -> bool {
        match id {
            FieldId::PetFeeType => self.pets_allowed,
            FieldId::PetFeeAmount | FieldId::PetMonthlyFee | FieldId::PetNightlyFee => {
                self.pets_allowed && self.pet_fee_type.is_some_and(|t| t.fee_field() == id)
            }
            _ => true,
        }
    }

    /// Returns the selected country, if any.
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    /// Returns the selected amenities.
    pub fn amenities(&self) -> &BTreeSet<Amenity> {
        &self.amenities
    }

    /// Returns `true` if pets are allowed.
    pub fn pets_allowed(&self) -> bool {
        self.pets_allowed
    }

    /// Returns the selected pet fee shape, if any.
    pub fn pet_fee_type(&self) -> Option<PetFeeType> {
        self.pet_fee_type
    }

    /// A complete, valid draft: the Miami villa used throughout the tests.
    #[cfg(test)]
    pub(crate) fn sample() -> Self {
        [
            (FieldId::Title, FieldValue::from("Villa")),
            (FieldId::City, "Miami".into()),
            (FieldId::State, "FL".into()),
            (FieldId::Country, Country::UnitedStates.into()),
            (FieldId::ZipCode, "33139".into()),
            (FieldId::PricePerMonth, "2000".into()),
            (FieldId::Bedrooms, "3".into()),
            (FieldId::Bathrooms, "2".into()),
            (FieldId::Beds, "3".into()),
            (FieldId::Amenities, BTreeSet::from([Amenity::Wifi]).into()),
        ]
        .into_iter()
        .fold(Self::default(), |fields, (id, value)| {
            fields.with(id, value).expect("sample values match field kinds")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pet_fees() -> FormFields {
        FormFields::default()
            .with(FieldId::PetsAllowed, true.into())
            .unwrap()
            .with(FieldId::PetFeeType, PetFeeType::Monthly.into())
            .unwrap()
            .with(FieldId::PetFeeAmount, "50".into())
            .unwrap()
            .with(FieldId::PetMonthlyFee, "25".into())
            .unwrap()
            .with(FieldId::PetNightlyFee, "5".into())
            .unwrap()
    }

    mod update {
        use super::*;

        #[test]
        fn replaces_only_the_named_field() {
            let before = FormFields::default()
                .with(FieldId::City, "Miami".into())
                .unwrap();
            let after = before.with(FieldId::Title, "Villa".into()).unwrap();
            assert_eq!(after.text(FieldId::Title), Some("Villa"));
            assert_eq!(after.text(FieldId::City), Some("Miami"));
            for id in FieldId::all() {
                if *id != FieldId::Title {
                    assert_eq!(after.value(*id), before.value(*id), "{id:?} changed");
                }
            }
        }

        #[test]
        fn leaves_original_untouched() {
            let before = FormFields::default();
            let _after = before.with(FieldId::Title, "Villa".into()).unwrap();
            assert_eq!(before.text(FieldId::Title), Some(""));
        }

        #[test]
        fn numeric_fields_store_raw_text() {
            let fields = FormFields::default()
                .with(FieldId::Bedrooms, "three".into())
                .unwrap();
            assert_eq!(fields.text(FieldId::Bedrooms), Some("three"));
        }

        #[test]
        fn country_is_typed() {
            let fields = FormFields::default()
                .with(FieldId::Country, Country::Canada.into())
                .unwrap();
            assert_eq!(fields.country(), Some(Country::Canada));
            assert_eq!(fields.text(FieldId::Country), None);
        }

        #[test]
        fn amenities_replace_the_whole_set() {
            let fields = FormFields::default()
                .with(
                    FieldId::Amenities,
                    BTreeSet::from([Amenity::Wifi, Amenity::Pool]).into(),
                )
                .unwrap()
                .with(FieldId::Amenities, BTreeSet::from([Amenity::Gym]).into())
                .unwrap();
            assert_eq!(fields.amenities(), &BTreeSet::from([Amenity::Gym]));
        }

        #[test]
        fn text_into_flag_is_rejected() {
            let result = FormFields::default().with(FieldId::PetsAllowed, "yes".into());
            assert_eq!(
                result,
                Err(UpdateError::KindMismatch {
                    field: FieldId::PetsAllowed,
                    given: "text",
                })
            );
        }

        #[test]
        fn flag_into_text_is_rejected() {
            let result = FormFields::default().with(FieldId::Title, true.into());
            assert_eq!(
                result,
                Err(UpdateError::KindMismatch {
                    field: FieldId::Title,
                    given: "flag",
                })
            );
        }

        #[test]
        fn country_into_pet_fee_type_is_rejected() {
            let result = FormFields::default().with(FieldId::PetFeeType, Country::Japan.into());
            assert!(matches!(
                result,
                Err(UpdateError::KindMismatch {
                    field: FieldId::PetFeeType,
                    ..
                })
            ));
        }

        #[test]
        fn mismatch_error_message() {
            let err = FormFields::default()
                .with(FieldId::Amenities, "wifi".into())
                .unwrap_err();
            assert_eq!(err.to_string(), "amenities does not accept a text value");
        }
    }

    mod pets {
        use super::*;

        #[test]
        fn disallowing_pets_clears_fee_group() {
            let fields = with_pet_fees()
                .with(FieldId::PetsAllowed, false.into())
                .unwrap();
            assert!(!fields.pets_allowed());
            assert_eq!(fields.pet_fee_type(), None);
            assert_eq!(fields.text(FieldId::PetFeeAmount), Some(""));
            assert_eq!(fields.text(FieldId::PetMonthlyFee), Some(""));
            assert_eq!(fields.text(FieldId::PetNightlyFee), Some(""));
        }

        #[test]
        fn allowing_pets_keeps_fee_group() {
            let fields = with_pet_fees()
                .with(FieldId::PetsAllowed, true.into())
                .unwrap();
            assert_eq!(fields.pet_fee_type(), Some(PetFeeType::Monthly));
            assert_eq!(fields.text(FieldId::PetMonthlyFee), Some("25"));
        }

        #[test]
        fn fee_type_disabled_without_pets() {
            let fields = FormFields::default();
            assert!(!fields.is_enabled(FieldId::PetFeeType));
            assert!(!fields.is_enabled(FieldId::PetFeeAmount));
        }

        #[test]
        fn only_selected_fee_amount_is_enabled() {
            for fee_type in PetFeeType::all() {
                let fields = FormFields::default()
                    .with(FieldId::PetsAllowed, true.into())
                    .unwrap()
                    .with(FieldId::PetFeeType, (*fee_type).into())
                    .unwrap();
                for other in PetFeeType::all() {
                    assert_eq!(
                        fields.is_enabled(other.fee_field()),
                        other == fee_type,
                        "{fee_type:?} selected, checking {other:?}"
                    );
                }
            }
        }

        #[test]
        fn no_fee_amount_enabled_before_type_chosen() {
            let fields = FormFields::default()
                .with(FieldId::PetsAllowed, true.into())
                .unwrap();
            assert!(fields.is_enabled(FieldId::PetFeeType));
            for fee_type in PetFeeType::all() {
                assert!(!fields.is_enabled(fee_type.fee_field()));
            }
        }

        #[test]
        fn other_fields_always_enabled() {
            let fields = FormFields::default();
            assert!(fields.is_enabled(FieldId::Title));
            assert!(fields.is_enabled(FieldId::PetsAllowed));
        }
    }

    mod blank {
        use super::*;

        #[test]
        fn default_fields_are_blank() {
            let fields = FormFields::default();
            for id in FieldId::all() {
                assert!(fields.is_blank(*id), "{id:?} should start blank");
            }
        }

        #[test]
        fn whitespace_text_is_not_blank() {
            let fields = FormFields::default()
                .with(FieldId::Title, "   ".into())
                .unwrap();
            assert!(!fields.is_blank(FieldId::Title));
        }

        #[test]
        fn set_values_are_not_blank() {
            let fields = FormFields::default()
                .with(FieldId::Title, "Villa".into())
                .unwrap()
                .with(FieldId::Country, Country::France.into())
                .unwrap()
                .with(FieldId::Amenities, BTreeSet::from([Amenity::Tv]).into())
                .unwrap();
            assert!(!fields.is_blank(FieldId::Title));
            assert!(!fields.is_blank(FieldId::Country));
            assert!(!fields.is_blank(FieldId::Amenities));
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let fields = FormFields::default()
            .with(FieldId::ZipCode, "33139".into())
            .unwrap();
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["zipCode"], "33139");
        assert_eq!(json["petsAllowed"], false);
        assert!(json["country"].is_null());
    }
}
