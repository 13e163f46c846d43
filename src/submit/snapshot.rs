use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{FieldId, FormFields};
use crate::staging::{ImageStaging, StagedImage};

/// Numeric fields parsed out of their raw text.
///
/// A field that is blank or does not parse is `None`; counts must be whole
/// non-negative numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAmounts {
    pub price_per_month: Option<f64>,
    pub cleaning_fee: Option<f64>,
    pub service_fee: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub beds: Option<u32>,
    pub square_feet: Option<u32>,
    pub pet_fee: Option<f64>,
}

impl ParsedAmounts {
    fn from_fields(fields: &FormFields) -> Self {
        let amount = |id| fields.text(id).and_then(parse_amount);
        let count = |id| fields.text(id).and_then(parse_count);
        Self {
            price_per_month: amount(FieldId::PricePerMonth),
            cleaning_fee: amount(FieldId::CleaningFee),
            service_fee: amount(FieldId::ServiceFee),
            bedrooms: count(FieldId::Bedrooms),
            bathrooms: amount(FieldId::Bathrooms),
            beds: count(FieldId::Beds),
            square_feet: count(FieldId::SquareFeet),
            pet_fee: fields
                .pet_fee_type()
                .filter(|_| fields.pets_allowed())
                .and_then(|t| amount(t.fee_field())),
        }
    }
}

/// The plain payload handed to a [`Submitter`](super::Submitter).
///
/// Carries field values and image file names only, never file contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    #[serde(flatten)]
    pub fields: FormFields,
    pub parsed: ParsedAmounts,
    pub main_image: Option<String>,
    pub additional_images: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ListingSnapshot {
    /// Captures the current draft and staged image names.
    pub fn assemble(
        fields: &FormFields,
        staging: &ImageStaging,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            fields: fields.clone(),
            parsed: ParsedAmounts::from_fields(fields),
            main_image: staging.main().map(|i| i.name().to_string()),
            additional_images: staging
                .additional()
                .iter()
                .map(StagedImage::name)
                .map(str::to_string)
                .collect(),
            submitted_at,
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_count(text: &str) -> Option<u32> {
    let value = parse_amount(text)?;
    (value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)).then_some(value as u32)
}
