use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one user-editable field of a listing draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Title,
    Description,
    Address,
    City,
    State,
    Country,
    ZipCode,
    PricePerMonth,
    CleaningFee,
    ServiceFee,
    Bedrooms,
    Bathrooms,
    Beds,
    SquareFeet,
    Amenities,
    PetsAllowed,
    PetFeeType,
    PetFeeAmount,
    PetMonthlyFee,
    PetNightlyFee,
}

static ALL_FIELDS: &[FieldId] = &[
    FieldId::Title,
    FieldId::Description,
    FieldId::Address,
    FieldId::City,
    FieldId::State,
    FieldId::Country,
    FieldId::ZipCode,
    FieldId::PricePerMonth,
    FieldId::CleaningFee,
    FieldId::ServiceFee,
    FieldId::Bedrooms,
    FieldId::Bathrooms,
    FieldId::Beds,
    FieldId::SquareFeet,
    FieldId::Amenities,
    FieldId::PetsAllowed,
    FieldId::PetFeeType,
    FieldId::PetFeeAmount,
    FieldId::PetMonthlyFee,
    FieldId::PetNightlyFee,
];

/// The shape of value a field holds, and so the control used to edit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Text restricted to digits at input time.
    Numeric,
    /// A yes/no toggle.
    Flag,
    /// One value out of a fixed list, or nothing.
    Select,
    /// Any subset of a fixed list.
    MultiSelect,
}

/// Form section a field is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Basic,
    Location,
    Pricing,
    Details,
    Rules,
    Images,
}

impl Section {
    /// Section heading as shown on the form.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Basic Information",
            Self::Location => "Location Details",
            Self::Pricing => "Pricing Information",
            Self::Details => "Property Details",
            Self::Rules => "Rules",
            Self::Images => "Property Images",
        }
    }
}

impl FieldId {
    /// Returns every field in form order.
    pub fn all() -> &'static [FieldId] {
        ALL_FIELDS
    }

    /// Wire name used in submission payloads and logs (e.g. `zipCode`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::ZipCode => "zipCode",
            Self::PricePerMonth => "pricePerMonth",
            Self::CleaningFee => "cleaningFee",
            Self::ServiceFee => "serviceFee",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::Beds => "beds",
            Self::SquareFeet => "squareFeet",
            Self::Amenities => "amenities",
            Self::PetsAllowed => "petsAllowed",
            Self::PetFeeType => "petFeeType",
            Self::PetFeeAmount => "petFeeAmount",
            Self::PetMonthlyFee => "petMonthlyFee",
            Self::PetNightlyFee => "petNightlyFee",
        }
    }

    /// Human-readable label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::ZipCode => "Zip Code",
            Self::PricePerMonth => "Price Per Month",
            Self::CleaningFee => "Cleaning Fee",
            Self::ServiceFee => "Service Fee",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Beds => "Beds",
            Self::SquareFeet => "Square Feet",
            Self::Amenities => "Amenities",
            Self::PetsAllowed => "Pets Allowed?",
            Self::PetFeeType => "Pet Fee Type",
            Self::PetFeeAmount => "One-time Fee",
            Self::PetMonthlyFee => "Monthly Pet Rent",
            Self::PetNightlyFee => "Nightly Pet Rent",
        }
    }

    /// Hint text rendered while the field is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Title => Some("Beautiful Beachfront Villa"),
            Self::Description => Some("Describe your property in detail..."),
            Self::Address => Some("123 Main Street"),
            Self::City => Some("Miami"),
            Self::State => Some("Florida"),
            Self::Country => Some("Select a country"),
            Self::ZipCode => Some("33139"),
            Self::PricePerMonth
            | Self::CleaningFee
            | Self::ServiceFee
            | Self::PetFeeAmount
            | Self::PetMonthlyFee
            | Self::PetNightlyFee => Some("0.00"),
            Self::Amenities => Some("Select amenities"),
            _ => None,
        }
    }

    /// The kind of value this field holds.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Title
            | Self::Description
            | Self::Address
            | Self::City
            | Self::State
            | Self::ZipCode => FieldKind::Text,
            Self::PricePerMonth
            | Self::CleaningFee
            | Self::ServiceFee
            | Self::Bedrooms
            | Self::Bathrooms
            | Self::Beds
            | Self::SquareFeet
            | Self::PetFeeAmount
            | Self::PetMonthlyFee
            | Self::PetNightlyFee => FieldKind::Numeric,
            Self::PetsAllowed => FieldKind::Flag,
            Self::Country | Self::PetFeeType => FieldKind::Select,
            Self::Amenities => FieldKind::MultiSelect,
        }
    }

    /// Returns `true` if a blank value blocks submission.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Title
                | Self::City
                | Self::State
                | Self::Country
                | Self::ZipCode
                | Self::PricePerMonth
                | Self::Bedrooms
                | Self::Amenities
                | Self::Bathrooms
                | Self::Beds
        )
    }

    /// Returns `true` if a non-blank value must also parse as a number.
    pub fn requires_number(self) -> bool {
        matches!(
            self,
            Self::PricePerMonth | Self::Bedrooms | Self::Bathrooms | Self::Beds
        )
    }

    /// Returns `true` if keystrokes into this field pass through the digit filter.
    pub fn is_numeric(self) -> bool {
        self.kind() == FieldKind::Numeric
    }

    /// Returns the form section this field belongs to.
    pub fn section(self) -> Section {
        match self {
            Self::Title | Self::Description => Section::Basic,
            Self::Address | Self::City | Self::State | Self::Country | Self::ZipCode => {
                Section::Location
            }
            Self::PricePerMonth | Self::CleaningFee | Self::ServiceFee => Section::Pricing,
            Self::Bedrooms | Self::Bathrooms | Self::Beds | Self::SquareFeet | Self::Amenities => {
                Section::Details
            }
            Self::PetsAllowed
            | Self::PetFeeType
            | Self::PetFeeAmount
            | Self::PetMonthlyFee
            | Self::PetNightlyFee => Section::Rules,
        }
    }
}

#[mutants::skip]
impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
