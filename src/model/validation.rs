use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::field::FieldId;
use super::fields::FormFields;
use super::numeric::is_number;

/// Validation errors for a listing draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Must be a valid number")]
    InvalidNumber,
    #[error("Main image is required")]
    MissingMainImage,
}

/// The control an error message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    /// A form field.
    Field(FieldId),
    /// The main image picker.
    MainImage,
}

#[mutants::skip]
impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(id) => write!(f, "{id}"),
            Self::MainImage => f.write_str("mainImage"),
        }
    }
}

impl From<FieldId> for ErrorKey {
    fn from(id: FieldId) -> Self {
        Self::Field(id)
    }
}

/// Human-readable error messages keyed by control, in form order.
///
/// An empty map means the draft can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMap(BTreeMap<ErrorKey, String>);

impl ErrorMap {
    /// Returns `true` if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of controls with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for `key`, if any.
    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.0.get(&key.into()).map(String::as_str)
    }

    /// Sets the message for `key`, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Clears the message for `key`.
    pub fn remove(&mut self, key: impl Into<ErrorKey>) {
        self.0.remove(&key.into());
    }

    /// Returns the first key in form order.
    pub fn first_key(&self) -> Option<ErrorKey> {
        self.0.keys().next().copied()
    }

    /// Iterates over `(key, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Validates a full draft snapshot.
///
/// Every rule is evaluated independently, so the result lists all problems
/// at once. A numeric field that is blank reports only the required error.
pub fn validate(fields: &FormFields, has_main_image: bool) -> ErrorMap {
    let mut errors = ErrorMap::default();

    for &id in FieldId::all() {
        if fields.is_blank(id) {
            if id.is_required() {
                errors.insert(id, ValidationError::Required.to_string());
            }
            continue;
        }
        if id.requires_number()
            && let Some(text) = fields.text(id)
            && !is_number(text)
        {
            errors.insert(id, ValidationError::InvalidNumber.to_string());
        }
    }

    if !has_main_image {
        errors.insert(
            ErrorKey::MainImage,
            ValidationError::MissingMainImage.to_string(),
        );
    }

    errors
}
