//! Listing draft domain model: fields, typed values, and validation.

mod amenity;
mod country;
mod field;
mod fields;
mod numeric;
mod pet;
mod validation;

pub use amenity::Amenity;
pub use country::Country;
pub use field::{FieldId, FieldKind, Section};
pub use fields::{FieldValue, FormFields, UpdateError};
pub use numeric::{filter_digits, is_number};
pub use pet::PetFeeType;
pub use validation::{ErrorKey, ErrorMap, ValidationError, validate};
