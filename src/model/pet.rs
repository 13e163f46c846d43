use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// How pet fees are charged. Exactly one shape applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetFeeType {
    OneTime,
    Monthly,
    Nightly,
}

static ALL_PET_FEE_TYPES: &[PetFeeType] = &[
    PetFeeType::OneTime,
    PetFeeType::Monthly,
    PetFeeType::Nightly,
];

impl PetFeeType {
    /// Returns all fee shapes in display order.
    pub fn all() -> &'static [PetFeeType] {
        ALL_PET_FEE_TYPES
    }

    /// The amount field that this fee shape enables.
    pub fn fee_field(self) -> FieldId {
        match self {
            Self::OneTime => FieldId::PetFeeAmount,
            Self::Monthly => FieldId::PetMonthlyFee,
            Self::Nightly => FieldId::PetNightlyFee,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time Fee",
            Self::Monthly => "Monthly Pet Rent",
            Self::Nightly => "Nightly Pet Rent",
        }
    }
}

#[mutants::skip]
impl fmt::Display for PetFeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_shape_enables_a_distinct_field() {
        assert_eq!(PetFeeType::OneTime.fee_field(), FieldId::PetFeeAmount);
        assert_eq!(PetFeeType::Monthly.fee_field(), FieldId::PetMonthlyFee);
        assert_eq!(PetFeeType::Nightly.fee_field(), FieldId::PetNightlyFee);
    }

    #[test]
    fn serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&PetFeeType::OneTime).unwrap(),
            "\"oneTime\""
        );
        assert_eq!(
            serde_json::to_string(&PetFeeType::Nightly).unwrap(),
            "\"nightly\""
        );
    }
}
